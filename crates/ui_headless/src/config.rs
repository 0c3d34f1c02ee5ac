//! Library-wide defaults installed once by the host application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{classes::ClassMap, modal::ModalOptions, select::NoneOption, value::OptionValue};

/// Modal feature toggles applied when a modal does not override them.
pub type ModalDefaults = ModalOptions;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected configuration payload.
pub enum ConfigError {
    /// The payload is not valid JSON for [`KitConfig`].
    #[error("invalid ui kit config: {0}")]
    Parse(String),
    /// The class prefix is blank.
    #[error("class prefix must not be empty")]
    EmptyClassPrefix,
    /// A class override maps a key to a blank class name.
    #[error("class override for `{key}` must not be empty")]
    EmptyClassOverride {
        /// Semantic key with the blank override.
        key: String,
    },
    /// The none-option label is blank while the option is enabled.
    #[error("none option text must not be empty while the none option is enabled")]
    InvalidNoneOptionText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Select defaults for the synthetic empty option.
pub struct SelectDefaults {
    /// Inject an empty option into single selects.
    pub include_none_option: bool,
    /// Label of the injected option.
    pub none_option_text: String,
    /// Value of the injected option.
    pub none_option_value: OptionValue,
}

impl Default for SelectDefaults {
    fn default() -> Self {
        let none = NoneOption::default();
        Self {
            include_none_option: none.include,
            none_option_text: none.text,
            none_option_value: none.value,
        }
    }
}

impl SelectDefaults {
    /// Resolves per-instance overrides against these defaults.
    pub fn none_option(
        &self,
        include: Option<bool>,
        text: Option<String>,
        value: Option<OptionValue>,
    ) -> NoneOption {
        NoneOption {
            include: include.unwrap_or(self.include_none_option),
            text: text.unwrap_or_else(|| self.none_option_text.clone()),
            value: value.unwrap_or_else(|| self.none_option_value.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Root configuration document.
pub struct KitConfig {
    /// Semantic class key mapping.
    pub classes: ClassMap,
    /// Select defaults.
    pub select: SelectDefaults,
    /// Modal defaults.
    pub modal: ModalDefaults,
}

impl KitConfig {
    /// Parses and validates a JSON object whose sections are objects too. Missing fields take
    /// their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let Some(sections) = value.as_object() else {
            return Err(ConfigError::Parse(
                "configuration must be a JSON object".to_string(),
            ));
        };
        if let Some((key, _)) = sections.iter().find(|(_, section)| !section.is_object()) {
            return Err(ConfigError::Parse(format!("`{key}` must be a JSON object")));
        }
        let config: Self =
            serde_json::from_value(value).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classes.prefix.trim().is_empty() {
            return Err(ConfigError::EmptyClassPrefix);
        }
        if let Some((key, _)) = self
            .classes
            .overrides
            .iter()
            .find(|(_, class)| class.trim().is_empty())
        {
            return Err(ConfigError::EmptyClassOverride { key: key.clone() });
        }
        if self.select.include_none_option && self.select.none_option_text.trim().is_empty() {
            return Err(ConfigError::InvalidNoneOptionText);
        }
        Ok(())
    }
}
