//! The dropdown state machine.
//!
//! [`DropdownController`] owns the open/highlight state and turns each
//! [`Intent`] into a [`Transition`]: the new state plus, at most, one proposed
//! selection value. Every intent is handled in one call; the caller never sees
//! a half-applied state.

use crate::option::OptionRef;
use crate::selection::{SelectionMode, SelectionModel, SelectionValue};
use crate::state::WidgetState;

/// What the user asked the dropdown to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Primary activation: open, or commit the highlighted row and close.
    Activate,
    /// Move the highlight by +1/-1, or open if closed.
    Navigate(isize),
    /// Close.
    Escape,
    /// Pointer over an option row.
    HoverOption(usize),
    /// Pointer click on an option row.
    ClickOption(usize),
    /// Clear the selection.
    ClickClear,
    /// Focus left the widget.
    Blur,
    /// Remove a selected value via its badge (multiple mode).
    ToggleBadge(usize),
}

/// Outcome of applying one intent.
#[derive(Debug, Clone, Default)]
pub struct Transition {
    /// Proposed new selection, if the intent committed one.
    pub change: Option<SelectionValue>,
    /// Whether open/highlight state changed.
    pub state_changed: bool,
}

impl Transition {
    fn state(state_changed: bool) -> Self {
        Self {
            change: None,
            state_changed,
        }
    }

    /// True if the intent had any effect.
    pub fn is_handled(&self) -> bool {
        self.state_changed || self.change.is_some()
    }
}

/// State machine driving a single dropdown.
#[derive(Debug, Clone, Default)]
pub struct DropdownController {
    state: WidgetState,
}

impl DropdownController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.state.highlighted_index
    }

    /// Re-clamp the highlight after the options list changed length.
    pub fn sync_options(&mut self, option_count: usize) -> bool {
        let clamped = self.state.clamp(option_count);
        if clamped {
            log::debug!(
                "[dropdown] options shrank to {}, highlight clamped to {}",
                option_count,
                self.state.highlighted_index
            );
        }
        clamped
    }

    /// Apply an intent against this cycle's options and selection.
    pub fn apply(
        &mut self,
        intent: Intent,
        options: &[OptionRef],
        selection: &SelectionModel<'_>,
    ) -> Transition {
        let clamped = self.sync_options(options.len());
        let before = self.state;

        let mut transition = match intent {
            Intent::Activate => self.activate(options, selection),
            Intent::Navigate(delta) => {
                if self.state.is_open {
                    Transition::state(self.state.move_highlight(delta, options.len()))
                } else {
                    Transition::state(self.state.open())
                }
            }
            Intent::Escape | Intent::Blur => Transition::state(self.state.close()),
            Intent::HoverOption(index) => {
                if self.state.is_open && index < options.len() {
                    Transition::state(self.state.set_highlight(index))
                } else {
                    Transition::default()
                }
            }
            Intent::ClickOption(index) => match options.get(index) {
                Some(option) if self.state.is_open => {
                    let change = selection.select(option);
                    self.state.close();
                    Transition {
                        change,
                        state_changed: true,
                    }
                }
                _ => Transition::default(),
            },
            Intent::ClickClear => Transition {
                change: Some(selection.clear()),
                state_changed: false,
            },
            Intent::ToggleBadge(index) => Transition {
                change: self.toggle_badge(index, selection),
                state_changed: false,
            },
        };
        transition.state_changed |= clamped;

        log::debug!(
            "[dropdown] {:?}: {:?} -> {:?} change={}",
            intent,
            before,
            self.state,
            transition.change.is_some()
        );
        transition
    }

    /// Open when closed; when open, commit the highlighted row and close.
    ///
    /// The highlighted row is read before the close so the commit always sees
    /// the pre-transition index.
    fn activate(&mut self, options: &[OptionRef], selection: &SelectionModel<'_>) -> Transition {
        if !self.state.is_open {
            return Transition::state(self.state.open());
        }
        let change = options
            .get(self.state.highlighted_index)
            .and_then(|option| selection.select(option));
        self.state.close();
        Transition {
            change,
            state_changed: true,
        }
    }

    fn toggle_badge(&self, index: usize, selection: &SelectionModel<'_>) -> Option<SelectionValue> {
        match selection.mode() {
            SelectionMode::Multiple => {
                let option = selection.value().options().get(index)?;
                selection.select(option)
            }
            SelectionMode::Single => None,
        }
    }
}
