use wayfind_geom::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable handle of a named node within one floor plan.
///
/// Handles are assigned in source order. Two nodes at the same coordinates are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A booth, facility, or other point of interest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedNode {
    pub id: NodeId,
    pub name: String,
    pub position: Point,
    /// Booth type or facility class, when the source provides one.
    pub category: Option<String>,
    /// Human-readable location label (hall, wing, ...).
    pub location: Option<String>,
}

impl NamedNode {
    fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
        haystack.to_lowercase().contains(needle_lower)
    }

    /// Case-insensitive substring match over name and location label.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        Self::contains_ignore_case(&self.name, &needle)
            || self
                .location
                .as_deref()
                .is_some_and(|loc| Self::contains_ignore_case(loc, &needle))
    }
}
