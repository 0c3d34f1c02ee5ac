//! Presentational prop tokens. None of these carry behavior; they only feed class resolution.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Three-step control size used by buttons, checkboxes, and switches.
pub enum Size {
    /// Dense control.
    Small,
    /// Default control.
    Medium,
    /// Large control.
    Large,
}

impl Default for Size {
    fn default() -> Self {
        Self::Medium
    }
}

impl Size {
    /// Stable token used in class keys.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Two-step size used by text fields and selects.
pub enum FieldSize {
    /// Dense field.
    Small,
    /// Default field.
    Medium,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl FieldSize {
    /// Stable token used in class keys.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }

    pub(crate) fn is_small(self) -> bool {
        matches!(self, Self::Small)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic color scheme.
pub enum Color {
    /// Primary brand color.
    Primary,
    /// Secondary brand color.
    Secondary,
    /// Error color.
    Error,
    /// Warning color.
    Warning,
    /// Informational color.
    Info,
    /// Success color.
    Success,
}

impl Default for Color {
    fn default() -> Self {
        Self::Primary
    }
}

impl Color {
    /// Stable token used in class keys.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button fill style.
pub enum ButtonVariant {
    /// Text-only button without a surface.
    Text,
    /// Filled button.
    Contained,
    /// Bordered button.
    Outlined,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Contained
    }
}

impl ButtonVariant {
    /// Stable token used in class keys.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Contained => "contained",
            Self::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Input field chrome.
pub enum FieldVariant {
    /// Bordered field with a notched outline.
    Outlined,
    /// Field with a filled surface.
    Filled,
    /// Underlined field.
    Standard,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Outlined
    }
}

impl FieldVariant {
    /// Stable token used in class keys.
    pub fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Standard => "standard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Label position relative to a checkbox or switch.
pub enum LabelPlacement {
    /// Label before the control.
    Start,
    /// Label after the control.
    End,
    /// Label above the control.
    Top,
    /// Label below the control.
    Bottom,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self::End
    }
}

impl LabelPlacement {
    /// Stable token used in class keys.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Whether the label is rendered before the control in document order.
    pub fn label_first(self) -> bool {
        matches!(self, Self::Start | Self::Top)
    }

    /// Whether label and control stack vertically.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}
