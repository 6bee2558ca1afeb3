pub mod config;
pub mod controller;
pub mod dispatch;
pub mod equality;
pub mod error;
pub mod event;
pub mod ids;
pub mod keymap;
pub mod option;
pub mod render;
pub mod selection;
pub mod state;
pub mod widget;

pub use controller::{DropdownController, Intent, Transition};
pub use widget::{Dropdown, EventResult, Props};

pub mod prelude {
    pub use crate::config::DropdownConfig;
    pub use crate::controller::{DropdownController, Intent, Transition};
    pub use crate::dispatch::InputDispatcher;
    pub use crate::equality::Equality;
    pub use crate::error::{KeymapError, PartError};
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::ids::{DropdownId, Part};
    pub use crate::keymap::{KeyAction, KeyCombo, Keymap};
    pub use crate::option::{OptionRef, OptionValue, SelectOption, options};
    pub use crate::render::{BadgeView, DropdownView, OptionView, RenderProjection};
    pub use crate::selection::{SelectionMode, SelectionModel, SelectionValue};
    pub use crate::state::WidgetState;
    pub use crate::widget::{Dropdown, EventResult, Props};
}
