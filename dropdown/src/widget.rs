//! The assembled dropdown widget.

use crate::config::DropdownConfig;
use crate::controller::{DropdownController, Intent};
use crate::dispatch::InputDispatcher;
use crate::event::Event;
use crate::ids::DropdownId;
use crate::option::OptionRef;
use crate::render::{DropdownView, RenderProjection};
use crate::selection::{SelectionModel, SelectionValue};
use crate::state::WidgetState;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Caller-owned inputs, read fresh on every interaction.
///
/// The shape of `value` selects the mode.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    pub options: &'a [OptionRef],
    pub value: &'a SelectionValue,
}

impl<'a> Props<'a> {
    pub fn new(options: &'a [OptionRef], value: &'a SelectionValue) -> Self {
        Self { options, value }
    }
}

/// A controlled dropdown.
///
/// The widget keeps only open/highlight state. Selection changes are proposed
/// through the `on_change` callback; the caller stores the new value and
/// passes it back in the next [`Props`].
///
/// ```
/// use dropdown::prelude::*;
///
/// let options = options([("Apple", "apple"), ("Banana", "banana")]);
/// let value = SelectionValue::Single(None);
/// let mut fruit = Dropdown::new(DropdownConfig::new("fruit"));
/// let mut changed = None;
///
/// fruit.handle_event(&Event::key("fruit", Key::Enter), Props::new(&options, &value), |_| {});
/// fruit.handle_event(&Event::key("fruit", Key::Down), Props::new(&options, &value), |_| {});
/// fruit.handle_event(&Event::key("fruit", Key::Enter), Props::new(&options, &value), |v| {
///     changed = Some(v)
/// });
///
/// assert_eq!(changed.map(|v| v.labels().join(",")), Some("Banana".to_string()));
/// assert!(!fruit.is_open());
/// ```
#[derive(Debug, Clone)]
pub struct Dropdown {
    config: DropdownConfig,
    dispatcher: InputDispatcher,
    controller: DropdownController,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new(DropdownConfig::default())
    }
}

impl Dropdown {
    pub fn new(config: DropdownConfig) -> Self {
        let dispatcher = InputDispatcher::new(config.id.clone(), config.keymap.clone());
        Self {
            config,
            dispatcher,
            controller: DropdownController::new(),
        }
    }

    pub fn id(&self) -> &DropdownId {
        &self.config.id
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn state(&self) -> WidgetState {
        self.controller.state()
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn highlighted_index(&self) -> usize {
        self.controller.highlighted_index()
    }

    /// Classify a raw event and apply the resulting intent.
    pub fn handle_event(
        &mut self,
        event: &Event,
        props: Props<'_>,
        on_change: impl FnOnce(SelectionValue),
    ) -> EventResult {
        match self.dispatcher.classify(event) {
            Some(intent) => self.apply(intent, props, on_change),
            None => EventResult::Ignored,
        }
    }

    /// Apply an intent directly, bypassing event classification.
    pub fn apply(
        &mut self,
        intent: Intent,
        props: Props<'_>,
        on_change: impl FnOnce(SelectionValue),
    ) -> EventResult {
        let selection = SelectionModel::new(props.value, &self.config.equality);
        let transition = self.controller.apply(intent, props.options, &selection);
        if let Some(change) = transition.change {
            log::debug!(
                "[dropdown {}] change -> {:?}",
                self.config.id,
                change.labels()
            );
            on_change(change);
        }
        EventResult::Consumed
    }

    /// Snapshot for rendering.
    pub fn view<'a>(&'a self, props: Props<'a>) -> DropdownView<'a> {
        let selection = SelectionModel::new(props.value, &self.config.equality);
        // The options may have shrunk since the last intent
        let mut state = self.controller.state();
        state.clamp(props.options.len());
        DropdownView::build(
            &self.config.id,
            state,
            props.options,
            &selection,
            &self.config.placeholder,
        )
    }

    /// Build the view and hand it to a projection.
    pub fn render<R: RenderProjection>(
        &self,
        props: Props<'_>,
        projection: &mut R,
    ) -> Result<(), R::Error> {
        projection.render(&self.view(props))
    }
}
