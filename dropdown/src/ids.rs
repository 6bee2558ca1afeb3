//! Element ids for a dropdown and its inner parts.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::PartError;

/// Identifier of a dropdown instance. Also the id of its container element,
/// which is the one keyboard focus target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropdownId(String);

impl DropdownId {
    /// Allocate a process-unique id.
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(format!("__dropdown_{}", COUNTER.fetch_add(1, Ordering::SeqCst)))
    }

    /// Use a caller-chosen id.
    ///
    /// Ids ending in a part suffix (`-clear`, `-opt-{i}`, `-badge-{j}`) are
    /// ambiguous: a dropdown named `a` would claim `a-clear` as its clear
    /// button. Use [`DropdownId::try_named`] for ids not fixed in code.
    pub fn named(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Use a caller-chosen id, rejecting ids that read as another
    /// dropdown's part.
    pub fn try_named(id: impl Into<String>) -> Result<Self, PartError> {
        let id = id.into();
        let claimed = id
            .match_indices('-')
            .any(|(at, _)| DropdownId(id[..at].to_string()).resolve(&id).is_ok());
        if claimed {
            return Err(PartError::AmbiguousId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of a part of this dropdown.
    pub fn part(&self, part: Part) -> String {
        match part {
            Part::Container => self.0.clone(),
            Part::Clear => format!("{}-clear", self.0),
            Part::Option(i) => format!("{}-opt-{}", self.0, i),
            Part::Badge(i) => format!("{}-badge-{}", self.0, i),
        }
    }

    /// Resolve an element id back to a part of this dropdown.
    pub fn resolve(&self, element_id: &str) -> Result<Part, PartError> {
        let Some(rest) = element_id.strip_prefix(self.0.as_str()) else {
            return Err(PartError::ForeignId(element_id.to_string()));
        };
        if rest.is_empty() {
            return Ok(Part::Container);
        }
        let Some(suffix) = rest.strip_prefix('-') else {
            return Err(PartError::ForeignId(element_id.to_string()));
        };

        if suffix == "clear" {
            return Ok(Part::Clear);
        }
        if let Some(index) = suffix.strip_prefix("opt-") {
            return parse_index(index, element_id).map(Part::Option);
        }
        if let Some(index) = suffix.strip_prefix("badge-") {
            return parse_index(index, element_id).map(Part::Badge);
        }
        Err(PartError::UnknownPart(element_id.to_string()))
    }
}

impl Default for DropdownId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DropdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An addressable element inside a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Outer interactive container (focus target, click-to-toggle)
    Container,
    /// Clear button
    Clear,
    /// Option row, by index into the options list
    Option(usize),
    /// Value badge, by index into the selected values (multiple mode)
    Badge(usize),
}

fn parse_index(index: &str, element_id: &str) -> Result<usize, PartError> {
    index
        .parse()
        .map_err(|_| PartError::BadIndex(element_id.to_string()))
}
