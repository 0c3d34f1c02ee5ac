//! Library configuration context.

use leptos::*;
use ui_headless::{ClassList, KitConfig, ModalDefaults, SelectDefaults};

#[derive(Clone, Copy)]
/// Leptos context carrying the active [`KitConfig`].
pub struct KitContext {
    config: StoredValue<KitConfig>,
}

impl KitContext {
    fn new(config: KitConfig) -> Self {
        Self {
            config: store_value(config),
        }
    }

    /// Snapshot of the active configuration.
    pub fn config(&self) -> KitConfig {
        self.config.get_value()
    }

    /// Renders a semantic class list through the configured class map.
    pub fn class(&self, list: &ClassList) -> String {
        self.config.with_value(|config| config.classes.render(list))
    }

    /// Concrete class for a single semantic key.
    pub fn class_key(&self, key: &str) -> String {
        self.config
            .with_value(|config| config.classes.class_for(key).into_owned())
    }

    /// Select defaults.
    pub fn select(&self) -> SelectDefaults {
        self.config.with_value(|config| config.select.clone())
    }

    /// Modal defaults.
    pub fn modal(&self) -> ModalDefaults {
        self.config.with_value(|config| config.modal)
    }
}

#[component]
/// Installs a [`KitConfig`] for every descendant component.
///
/// `config_json` is parsed with [`KitConfig::from_json_str`]; a rejected payload is logged and
/// replaced by the defaults. An explicit `config` wins over `config_json`.
pub fn UiKitProvider(
    #[prop(optional)] config: Option<KitConfig>,
    #[prop(optional, into)] config_json: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| match config_json.as_deref() {
        Some(raw) => KitConfig::from_json_str(raw).unwrap_or_else(|err| {
            logging::warn!("ui kit config rejected, using defaults: {err}");
            KitConfig::default()
        }),
        None => KitConfig::default(),
    });

    provide_context(KitContext::new(config));
    children().into_view()
}

/// Returns the nearest [`KitContext`], or a default configuration outside any provider.
pub fn use_kit_config() -> KitContext {
    use_context::<KitContext>().unwrap_or_else(|| KitContext::new(KitConfig::default()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_headless::{classes::chip_classes, BackdropMode};

    use super::*;

    #[test]
    fn context_falls_back_to_defaults_without_provider() {
        let _ = leptos::create_runtime();
        let kit = use_kit_config();
        assert_eq!(kit.class_key("chip"), "ui-chip");
        assert_eq!(kit.select().none_option_text, "None");
        assert_eq!(kit.modal().backdrop, BackdropMode::Visible);
    }

    #[test]
    fn context_renders_through_configured_class_map() {
        let _ = leptos::create_runtime();
        let config = KitConfig::from_json_str(
            r#"{"classes":{"prefix":"x-","overrides":{"chip--disabled":"muted"}}}"#,
        )
        .expect("valid config");
        let kit = KitContext::new(config);
        assert_eq!(kit.class(&chip_classes(true).0), "x-chip muted");
    }
}
