//! Classifies raw events into controller intents.
//!
//! Keyboard events count only when aimed at the container, the single focus
//! target. Pointer events resolve to exactly one part: a click on the clear
//! button or an option row never also reaches the container's own click
//! handler.

use crate::controller::Intent;
use crate::event::{Event, Key, MouseButton};
use crate::ids::{DropdownId, Part};
use crate::keymap::{KeyAction, Keymap};

#[derive(Debug, Clone)]
pub struct InputDispatcher {
    id: DropdownId,
    keymap: Keymap,
}

impl InputDispatcher {
    pub fn new(id: DropdownId, keymap: Keymap) -> Self {
        Self { id, keymap }
    }

    pub fn id(&self) -> &DropdownId {
        &self.id
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Whether an event origin is this dropdown's keyboard focus target.
    pub fn is_focus_target(&self, target: Option<&str>) -> bool {
        target == Some(self.id.as_str())
    }

    /// Map an event to the intent it expresses, if any.
    pub fn classify(&self, event: &Event) -> Option<Intent> {
        let intent = match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => {
                if !self.is_focus_target(target.as_deref()) {
                    log::trace!(
                        "[dropdown {}] key {:?} outside focus target {:?}",
                        self.id,
                        key,
                        target
                    );
                    return None;
                }
                // Unmapped terminal keys never match a binding
                if *key == Key::Other {
                    return None;
                }
                match self.keymap.action(*key, *modifiers)? {
                    KeyAction::Activate => Intent::Activate,
                    KeyAction::Previous => Intent::Navigate(-1),
                    KeyAction::Next => Intent::Navigate(1),
                    KeyAction::Close => Intent::Escape,
                }
            }
            Event::Click { target, button, .. } => {
                if *button != MouseButton::Left {
                    return None;
                }
                match self.part(target.as_deref())? {
                    Part::Container => Intent::Activate,
                    Part::Clear => Intent::ClickClear,
                    Part::Option(index) => Intent::ClickOption(index),
                    Part::Badge(index) => Intent::ToggleBadge(index),
                }
            }
            Event::Hover { target, .. } => match self.part(target.as_deref())? {
                Part::Option(index) => Intent::HoverOption(index),
                _ => return None,
            },
            Event::Blur { target } if self.is_focus_target(Some(target.as_str())) => Intent::Blur,
            Event::Blur { .. } | Event::Focus { .. } => return None,
        };
        log::trace!("[dropdown {}] {:?} -> {:?}", self.id, event, intent);
        Some(intent)
    }

    fn part(&self, target: Option<&str>) -> Option<Part> {
        self.id.resolve(target?).ok()
    }
}
