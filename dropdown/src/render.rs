//! What the render projection gets to see.
//!
//! The view is a snapshot of one interaction cycle: open/highlight state plus
//! per-row flags. It carries no logic; projections draw it and tag their hit
//! targets with the ids it provides.

use crate::ids::{DropdownId, Part};
use crate::option::OptionRef;
use crate::selection::{SelectionMode, SelectionModel};
use crate::state::WidgetState;

/// A row in the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    /// Element id for hit testing
    pub id: String,
    pub label: &'a str,
    pub is_selected: bool,
    pub is_highlighted: bool,
}

/// A removable value badge (multiple mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView<'a> {
    /// Element id for hit testing
    pub id: String,
    pub label: &'a str,
}

/// Snapshot handed to a [`RenderProjection`].
#[derive(Debug, Clone)]
pub struct DropdownView<'a> {
    pub id: &'a DropdownId,
    pub mode: SelectionMode,
    pub is_open: bool,
    pub highlighted_index: usize,
    pub placeholder: &'a str,
    /// Single mode: label of the selected option
    pub label: Option<&'a str>,
    /// Multiple mode: one badge per selected option, in order
    pub badges: Vec<BadgeView<'a>>,
    pub options: Vec<OptionView<'a>>,
    /// Element id of the clear button
    pub clear_id: String,
}

impl<'a> DropdownView<'a> {
    pub fn build(
        id: &'a DropdownId,
        state: WidgetState,
        options: &'a [OptionRef],
        selection: &SelectionModel<'a>,
        placeholder: &'a str,
    ) -> Self {
        let value = selection.value();
        let (label, badges) = match selection.mode() {
            SelectionMode::Single => {
                let label = value.options().first().map(|o| o.label.as_str());
                (label, Vec::new())
            }
            SelectionMode::Multiple => (
                None,
                value
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(i, o)| BadgeView {
                        id: id.part(Part::Badge(i)),
                        label: o.label.as_str(),
                    })
                    .collect(),
            ),
        };

        let options = options
            .iter()
            .enumerate()
            .map(|(i, option)| OptionView {
                id: id.part(Part::Option(i)),
                label: option.label.as_str(),
                is_selected: selection.is_selected(option),
                is_highlighted: state.is_open && i == state.highlighted_index,
            })
            .collect();

        Self {
            id,
            mode: selection.mode(),
            is_open: state.is_open,
            highlighted_index: state.highlighted_index,
            placeholder,
            label,
            badges,
            options,
            clear_id: id.part(Part::Clear),
        }
    }

    /// Text for the closed trigger: the selected label(s) or the placeholder.
    pub fn display_text(&self) -> String {
        match self.mode {
            SelectionMode::Single => self.label.unwrap_or(self.placeholder).to_string(),
            SelectionMode::Multiple if self.badges.is_empty() => self.placeholder.to_string(),
            SelectionMode::Multiple => self
                .badges
                .iter()
                .map(|b| b.label)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Draws a dropdown view. Hit targets should be tagged with the view's ids.
pub trait RenderProjection {
    type Error;

    fn render(&mut self, view: &DropdownView<'_>) -> Result<(), Self::Error>;
}
