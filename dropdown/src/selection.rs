//! Selection values and the operations that propose changes to them.
//!
//! The widget never owns the selection. [`SelectionModel`] reads the value
//! the caller passed in and returns the value the caller should store next.

use crate::equality::Equality;
use crate::option::OptionRef;

/// Selection mode, derived from the shape of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one option selected.
    Single,
    /// Zero or more options selected, in insertion order.
    Multiple,
}

/// The caller's current selection.
#[derive(Debug, Clone)]
pub enum SelectionValue {
    /// Single mode value.
    Single(Option<OptionRef>),
    /// Multiple mode value, in insertion order.
    Multiple(Vec<OptionRef>),
}

impl Default for SelectionValue {
    fn default() -> Self {
        SelectionValue::Single(None)
    }
}

impl SelectionValue {
    /// Empty multiple-mode value.
    pub fn empty_multiple() -> Self {
        SelectionValue::Multiple(Vec::new())
    }

    /// The mode this value belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionValue::Single(_) => SelectionMode::Single,
            SelectionValue::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectionValue::Single(value) => value.is_none(),
            SelectionValue::Multiple(values) => values.is_empty(),
        }
    }

    /// Selected options in order.
    pub fn options(&self) -> &[OptionRef] {
        match self {
            SelectionValue::Single(Some(option)) => std::slice::from_ref(option),
            SelectionValue::Single(None) => &[],
            SelectionValue::Multiple(values) => values,
        }
    }

    /// Labels of the selected options, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.options().iter().map(|o| o.label.as_str()).collect()
    }
}

/// Selection operations over a borrowed value.
#[derive(Debug, Clone, Copy)]
pub struct SelectionModel<'a> {
    value: &'a SelectionValue,
    equality: &'a Equality,
}

impl<'a> SelectionModel<'a> {
    pub fn new(value: &'a SelectionValue, equality: &'a Equality) -> Self {
        Self { value, equality }
    }

    pub fn mode(&self) -> SelectionMode {
        self.value.mode()
    }

    pub fn value(&self) -> &'a SelectionValue {
        self.value
    }

    /// Check if an option is part of the current selection.
    pub fn is_selected(&self, option: &OptionRef) -> bool {
        match self.value {
            SelectionValue::Single(current) => current
                .as_ref()
                .is_some_and(|current| self.equality.same(current, option)),
            SelectionValue::Multiple(values) => {
                values.iter().any(|v| self.equality.same(v, option))
            }
        }
    }

    /// Propose the value that results from selecting `option`.
    ///
    /// Single mode returns `None` when `option` is already the value; there is
    /// no toggle back to nothing. Multiple mode toggles membership, appending
    /// new options at the end.
    pub fn select(&self, option: &OptionRef) -> Option<SelectionValue> {
        match self.value {
            SelectionValue::Single(_) => {
                if self.is_selected(option) {
                    None
                } else {
                    Some(SelectionValue::Single(Some(OptionRef::clone(option))))
                }
            }
            SelectionValue::Multiple(values) => {
                let next = if self.is_selected(option) {
                    values
                        .iter()
                        .filter(|v| !self.equality.same(v, option))
                        .cloned()
                        .collect()
                } else {
                    let mut next = values.clone();
                    next.push(OptionRef::clone(option));
                    next
                };
                Some(SelectionValue::Multiple(next))
            }
        }
    }

    /// Propose the empty value of the current mode.
    pub fn clear(&self) -> SelectionValue {
        match self.mode() {
            SelectionMode::Single => SelectionValue::Single(None),
            SelectionMode::Multiple => SelectionValue::empty_multiple(),
        }
    }
}
