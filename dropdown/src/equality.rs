//! How two options are compared when testing and toggling selection.

use std::fmt;
use std::sync::Arc;

use crate::option::{OptionRef, OptionValue, SelectOption};

/// Key extraction function used by [`Equality::Key`].
pub type KeyFn = Arc<dyn Fn(&SelectOption) -> OptionValue + Send + Sync>;

/// Equality strategy for options.
///
/// The default is pointer identity of the shared handle. A caller that
/// rebuilds its option list between interactions gets fresh handles, and
/// under `Identity` the rebuilt options no longer match the old selection.
/// Such callers should pick `Value` or `Key`.
#[derive(Clone, Default)]
pub enum Equality {
    /// Same allocation (`Arc::ptr_eq`).
    #[default]
    Identity,
    /// Same `value` field.
    Value,
    /// Same caller-extracted key.
    Key(KeyFn),
}

impl Equality {
    /// Compare options by a key extracted from each.
    pub fn by_key<F>(f: F) -> Self
    where
        F: Fn(&SelectOption) -> OptionValue + Send + Sync + 'static,
    {
        Equality::Key(Arc::new(f))
    }

    /// Check whether two options are the same option under this strategy.
    pub fn same(&self, a: &OptionRef, b: &OptionRef) -> bool {
        match self {
            Equality::Identity => Arc::ptr_eq(a, b),
            Equality::Value => a.value == b.value,
            Equality::Key(key) => key(a.as_ref()) == key(b.as_ref()),
        }
    }
}

impl fmt::Debug for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Equality::Identity => write!(f, "Identity"),
            Equality::Value => write!(f, "Value"),
            Equality::Key(_) => write!(f, "Key(..)"),
        }
    }
}
