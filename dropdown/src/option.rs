//! Option types shown in a dropdown.

use std::fmt;
use std::sync::Arc;

/// Shared handle to a caller-owned option.
///
/// Options are immutable once created. The widget never clones the option
/// itself, only the handle, so pointer identity survives a round trip
/// through the change callback.
pub type OptionRef = Arc<SelectOption>;

/// The key half of an option.
///
/// This is a display/key hint, not a guaranteed unique identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// Text key
    Text(String),
    /// Numeric key
    Number(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n.into())
    }
}

/// A selectable item with a display label and a key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Display text
    pub label: String,
    /// Key value
    pub value: OptionValue,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a new option already wrapped in a shared handle.
    pub fn shared(label: impl Into<String>, value: impl Into<OptionValue>) -> OptionRef {
        Arc::new(Self::new(label, value))
    }
}

/// Build a list of shared options from `(label, value)` pairs.
///
/// ```
/// use dropdown::option::options;
///
/// let fruits = options([("Apple", "apple"), ("Banana", "banana")]);
/// assert_eq!(fruits[1].label, "Banana");
/// ```
pub fn options<L, V>(pairs: impl IntoIterator<Item = (L, V)>) -> Vec<OptionRef>
where
    L: Into<String>,
    V: Into<OptionValue>,
{
    pairs
        .into_iter()
        .map(|(label, value)| SelectOption::shared(label, value))
        .collect()
}
