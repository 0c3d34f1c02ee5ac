//! Option and selection value models shared by the select state machine and its renderer.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Scalar value carried by a select option: text, an integer, or a fractional number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Integer option value.
    Number(i64),
    /// Non-integer numeric option value.
    Float(FloatValue),
    /// Text option value.
    Text(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
/// Finite `f64` compared by bit pattern, with `-0.0` folded into `0.0`.
pub struct FloatValue(f64);

impl FloatValue {
    /// Wraps `value`.
    pub fn new(value: f64) -> Self {
        Self(if value == 0.0 { 0.0 } else { value })
    }

    /// Wrapped number.
    pub fn get(self) -> f64 {
        Self::new(self.0).0
    }

    fn bits(self) -> u64 {
        self.get().to_bits()
    }
}

impl PartialEq for FloatValue {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for FloatValue {}

impl Hash for FloatValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl OptionValue {
    /// Empty-selection sentinel for single mode.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Returns whether this is the empty text value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl Default for OptionValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{}", number.get()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(FloatValue::new(value))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// One selectable option. Supplied by the caller and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Option value. Uniqueness is assumed, not enforced.
    pub value: OptionValue,
    /// Visible label.
    pub label: String,
    /// Disabled options cannot be chosen.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Resolved select value. Multi-select is always [`SelectValue::Multiple`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    /// Selection of several values, in pick order.
    Multiple(Vec<OptionValue>),
    /// Single value or the empty sentinel.
    Single(OptionValue),
}

impl SelectValue {
    /// Mode-appropriate empty value: `""` or `[]`.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(Vec::new())
        } else {
            Self::Single(OptionValue::empty())
        }
    }

    /// Coerces the value into the shape required by the selection mode.
    ///
    /// A scalar handed to a multi-select becomes a one-element array (an empty scalar becomes
    /// `[]`); an array handed to a single select keeps its first element.
    pub fn coerce(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Self::Single(value), true) if value.is_empty() => Self::Multiple(Vec::new()),
            (Self::Single(value), true) => Self::Multiple(vec![value]),
            (Self::Multiple(values), false) => {
                Self::Single(values.into_iter().next().unwrap_or_default())
            }
            (value, _) => value,
        }
    }

    /// Returns whether `value` is part of the selection.
    pub fn contains(&self, value: &OptionValue) -> bool {
        match self {
            Self::Single(current) => current == value,
            Self::Multiple(values) => values.contains(value),
        }
    }

    /// Selected values as a slice view (zero or one element in single mode).
    pub fn values(&self) -> &[OptionValue] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }
}

impl From<OptionValue> for SelectValue {
    fn from(value: OptionValue) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<OptionValue>> for SelectValue {
    fn from(values: Vec<OptionValue>) -> Self {
        Self::Multiple(values)
    }
}

/// Synthetic, event-shaped change payload mirroring `event.target.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTarget {
    /// New value as seen by the event target.
    pub value: SelectValue,
}

/// One committed change notification: `(event, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChange {
    /// Event-shaped payload.
    pub target: ChangeTarget,
    /// Resolved new value.
    pub value: SelectValue,
}

impl SelectChange {
    pub(crate) fn new(value: SelectValue) -> Self {
        Self {
            target: ChangeTarget {
                value: value.clone(),
            },
            value,
        }
    }
}
