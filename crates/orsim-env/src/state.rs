//! Mutable per-episode simulation state.
//!
//! # Ownership model
//!
//! An [`EpisodeState`] is owned exclusively by one
//! [`SchedulingEnv`](crate::env::SchedulingEnv); all mutation goes
//! through `&mut self` on the environment, so the borrow checker rules
//! out sharing across concurrent episodes. `reset` rebuilds the state
//! wholesale rather than patching it.

use orsim_core::{RoomId, ScheduledCase, SurgicalCase};
use smallvec::{smallvec, SmallVec};

/// Remaining-busy counters for each room, in minutes. Zero means free.
///
/// Inline storage covers up to eight rooms without allocation; larger
/// hospitals spill to the heap transparently.
pub type RoomCounters = SmallVec<[u32; 8]>;

/// The complete mutable world for one episode.
///
/// Every case is in exactly one of `waiting`, `future`, `running`, or
/// `completed` at any instant, and only ever moves forward through them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeState {
    /// Wall-clock minute counter, starting at 0.
    pub time: u32,
    /// Per-room remaining-busy minutes.
    pub rooms: RoomCounters,
    /// Arrived, unassigned cases in arrival order. Arrivals append and
    /// assignments remove by position; nothing is ever front-inserted.
    pub waiting: Vec<SurgicalCase>,
    /// Cases that have not yet arrived, sorted by arrival time.
    pub future: Vec<SurgicalCase>,
    /// Cases currently occupying a room.
    pub running: Vec<ScheduledCase>,
    /// Cases whose room-busy timer has expired.
    pub completed: Vec<ScheduledCase>,
}

impl EpisodeState {
    /// Fresh state at minute zero with all rooms free.
    ///
    /// `cases` is sorted by arrival time and becomes the future list.
    pub(crate) fn new(num_rooms: usize, mut cases: Vec<SurgicalCase>) -> Self {
        cases.sort_by_key(|case| case.arrival_time);
        Self {
            time: 0,
            rooms: smallvec![0; num_rooms],
            waiting: Vec::new(),
            future: cases,
            running: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Advance the wall clock by one minute.
    ///
    /// Room counters count down before arrivals are admitted at the same
    /// minute, so a room freeing up now can take a case arriving now.
    /// Running cases whose finish time has been reached move to
    /// `completed`.
    pub(crate) fn advance_minute(&mut self) {
        self.time = self.time.saturating_add(1);
        for counter in self.rooms.iter_mut() {
            *counter = counter.saturating_sub(1);
        }
        let now = self.time;
        let mut still_running = Vec::with_capacity(self.running.len());
        for scheduled in self.running.drain(..) {
            if scheduled.finish_time() <= now {
                self.completed.push(scheduled);
            } else {
                still_running.push(scheduled);
            }
        }
        self.running = still_running;
    }

    /// Move every case whose arrival time has been reached from `future`
    /// to the back of `waiting`.
    ///
    /// The future list is sorted, so iterating in order preserves overall
    /// arrival order among the newly admitted.
    pub(crate) fn admit_arrivals(&mut self) {
        let now = self.time;
        let mut still_future = Vec::with_capacity(self.future.len());
        for case in self.future.drain(..) {
            if case.arrival_time <= now {
                self.waiting.push(case);
            } else {
                still_future.push(case);
            }
        }
        self.future = still_future;
    }

    /// Place the waiting case at `slot` into `room`.
    ///
    /// Caller must have classified the pair as legal: the room exists
    /// and is free, and the slot is within the waiting queue.
    pub(crate) fn place(&mut self, room: RoomId, slot: usize) -> ScheduledCase {
        let case = self.waiting.remove(slot);
        self.rooms[room.0] = case.duration;
        let scheduled = ScheduledCase {
            case,
            room,
            start_time: self.time,
        };
        self.running.push(scheduled);
        scheduled
    }

    /// Whether every room counter is zero.
    pub fn all_rooms_idle(&self) -> bool {
        self.rooms.iter().all(|&counter| counter == 0)
    }

    /// Whether no work remains to arrive or be assigned.
    pub fn work_exhausted(&self) -> bool {
        self.waiting.is_empty() && self.future.is_empty()
    }
}
