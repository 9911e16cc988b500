//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an operating room within an environment.
///
/// Rooms are fixed at environment creation and numbered sequentially;
/// `RoomId(n)` is the n-th room counter in the episode state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RoomId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
