//! Surgical cases, urgency levels, and the scheduled-case record.

use crate::id::RoomId;
use std::fmt;

/// Minutes of slack a case must leave before the end of the working day.
///
/// The generator only emits cases satisfying
/// `arrival_time + duration + TURNOVER_MARGIN <= day_length`, so every
/// generated case can in principle finish with buffer to spare.
pub const TURNOVER_MARGIN: u32 = 15;

/// Three-level priority tag attached to every surgical case.
///
/// The numeric level (1 = lowest, 3 = highest) drives reward shaping and
/// appears in observations; level 0 is reserved for observation padding.
///
/// # Examples
///
/// ```
/// use orsim_core::Urgency;
///
/// assert_eq!(Urgency::Critical.level(), 3);
/// assert_eq!(Urgency::from_level(2), Some(Urgency::Elevated));
/// assert_eq!(Urgency::from_level(0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Urgency {
    /// Elective work with no time pressure (level 1).
    Routine,
    /// Should be seen the same day (level 2).
    Elevated,
    /// Most urgent; waiting is penalized every minute (level 3).
    Critical,
}

impl Urgency {
    /// The numeric level used in observations and reward shaping.
    pub fn level(self) -> u8 {
        match self {
            Self::Routine => 1,
            Self::Elevated => 2,
            Self::Critical => 3,
        }
    }

    /// Inverse of [`level()`](Self::level). Returns `None` for anything
    /// outside 1..=3, including the padding value 0.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Routine),
            2 => Some(Self::Elevated),
            3 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Whether this is the most urgent level.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// One unit of surgical work, immutable once created.
///
/// During an episode a case lives in exactly one of four collections —
/// future, waiting, running, or completed — and only ever moves forward
/// through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurgicalCase {
    /// Procedure length in minutes. Always positive.
    pub duration: u32,
    /// Minute of the day at which the case arrives and becomes assignable.
    pub arrival_time: u32,
    /// Priority tag.
    pub urgency: Urgency,
}

impl SurgicalCase {
    /// Minutes this case has been waiting at minute `now`.
    ///
    /// Saturates at zero for cases that have not yet arrived.
    pub fn waiting_time(&self, now: u32) -> u32 {
        now.saturating_sub(self.arrival_time)
    }

    /// Whether the case can finish with turnover buffer before day end.
    pub fn fits_in_day(&self, day_length: u32) -> bool {
        u64::from(self.arrival_time) + u64::from(self.duration) + u64::from(TURNOVER_MARGIN)
            <= u64::from(day_length)
    }
}

/// A case that has been placed into a room, annotated with where and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduledCase {
    /// The placed case.
    pub case: SurgicalCase,
    /// The room it occupies.
    pub room: RoomId,
    /// Simulation minute at which placement occurred.
    pub start_time: u32,
}

impl ScheduledCase {
    /// Minute at which the room running this case frees up.
    pub fn finish_time(&self) -> u32 {
        self.start_time.saturating_add(self.case.duration)
    }
}
