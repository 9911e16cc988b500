//! Fixed-shape observation extraction.
//!
//! Projects [`EpisodeState`] into a snapshot whose shape never depends
//! on the actual waiting-list length: the per-case arrays are cut (or
//! zero-padded) to the configured window. Cases beyond the window still
//! exist in the queue but are invisible, and therefore unassignable,
//! this step.

use crate::state::EpisodeState;

/// Fixed-shape snapshot of the episode state, all integer-valued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Remaining-busy minutes per room, each in `[0, day_length]`.
    pub rooms: Vec<u32>,
    /// Current minute, in `[0, day_length]`.
    pub time: u32,
    /// True waiting-list length. May exceed the window width; callers
    /// must not assume it is capped by the padded arrays below.
    pub num_waiting: usize,
    /// Minutes waited by the first `window` queued cases, zero-padded.
    pub waiting_times: Vec<u32>,
    /// Urgency levels (1..=3) of the same cases; 0 marks padding.
    pub urgencies: Vec<u8>,
}

impl Observation {
    /// Capture a snapshot of `state` with a per-case window of `window`.
    pub fn capture(state: &EpisodeState, window: usize) -> Self {
        let mut waiting_times = vec![0u32; window];
        let mut urgencies = vec![0u8; window];
        for (i, case) in state.waiting.iter().take(window).enumerate() {
            waiting_times[i] = case.waiting_time(state.time);
            urgencies[i] = case.urgency.level();
        }
        Self {
            rooms: state.rooms.to_vec(),
            time: state.time,
            num_waiting: state.waiting.len(),
            waiting_times,
            urgencies,
        }
    }
}
