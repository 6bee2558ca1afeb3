//! Dropdown configuration.

use crate::equality::Equality;
use crate::ids::DropdownId;
use crate::keymap::Keymap;

/// Per-instance configuration.
///
/// ```
/// use dropdown::config::DropdownConfig;
/// use dropdown::equality::Equality;
///
/// let config = DropdownConfig::new("country")
///     .equality(Equality::Value)
///     .placeholder("Choose a country");
/// assert_eq!(config.id.as_str(), "country");
/// ```
#[derive(Debug, Clone)]
pub struct DropdownConfig {
    /// Id of the container element; inner part ids derive from it.
    pub id: DropdownId,

    /// Keyboard bindings honored on the container.
    pub keymap: Keymap,

    /// How options are matched against the selection.
    pub equality: Equality,

    /// Text shown by the projection when nothing is selected.
    pub placeholder: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            id: DropdownId::new(),
            keymap: Keymap::default(),
            equality: Equality::default(),
            placeholder: String::new(),
        }
    }
}

impl DropdownConfig {
    /// Create a new config with the given container id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: DropdownId::named(id),
            ..Default::default()
        }
    }

    /// Use an already built id, e.g. one from [`DropdownId::try_named`].
    pub fn with_id(mut self, id: DropdownId) -> Self {
        self.id = id;
        self
    }

    /// Set the keymap.
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Set the option equality strategy.
    pub fn equality(mut self, equality: Equality) -> Self {
        self.equality = equality;
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
