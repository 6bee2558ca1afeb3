//! Error types

/// Errors from building a keymap out of key strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    /// The key string had nothing after its modifiers
    #[error("Empty key string")]
    EmptyKey,

    /// The key name is not recognized
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// The modifier name is not recognized
    #[error("Unknown modifier '{modifier}' in '{spec}'")]
    UnknownModifier { modifier: String, spec: String },

    /// The action name is not recognized
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Errors from resolving an element id to a part of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartError {
    /// The id belongs to another element
    #[error("Element '{0}' is not part of this dropdown")]
    ForeignId(String),

    /// The id has this dropdown's prefix but an unknown suffix
    #[error("Unknown dropdown part: {0}")]
    UnknownPart(String),

    /// The part index is not a number
    #[error("Invalid part index in '{0}'")]
    BadIndex(String),

    /// The id reads as a part id of a shorter dropdown id
    #[error("Dropdown id '{0}' is ambiguous with a part id")]
    AmbiguousId(String),
}
