//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is the builder-input for constructing a
//! [`SchedulingEnv`](crate::env::SchedulingEnv).
//! [`validate()`](EnvConfig::validate) checks structural invariants at
//! construction so that `reset` and `step` can stay total: in particular
//! it fail-fasts the one real hazard in the system, a duration range
//! that would make the case generator resample forever.

use std::error::Error;
use std::fmt;

use orsim_core::{SurgicalCase, TURNOVER_MARGIN};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No rooms configured.
    NoRooms,
    /// Day length is zero minutes.
    ZeroDayLength,
    /// Observation/action window width is zero.
    ZeroObsWindow,
    /// A supplied case has a zero duration.
    ZeroCaseDuration {
        /// Index of the offending case in the supplied list.
        index: usize,
    },
    /// A supplied case is longer than the whole working day, which would
    /// let a room counter exceed `day_length`.
    CaseExceedsDay {
        /// Index of the offending case in the supplied list.
        index: usize,
        /// The case's duration.
        duration: u32,
        /// The configured day length.
        day_length: u32,
    },
    /// Generator is configured to produce zero cases.
    ZeroCaseCount,
    /// Generator minimum duration is zero.
    ZeroMinDuration,
    /// Generator duration range is inverted.
    EmptyDurationRange {
        /// The configured minimum duration.
        min_duration: u32,
        /// The configured maximum duration.
        max_duration: u32,
    },
    /// Every possible draw from the duration range is infeasible:
    /// `max_duration + TURNOVER_MARGIN >= day_length` would make
    /// rejection sampling loop forever.
    DurationRangeUnsatisfiable {
        /// The configured maximum duration.
        max_duration: u32,
        /// The configured day length.
        day_length: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRooms => write!(f, "num_rooms must be at least 1"),
            Self::ZeroDayLength => write!(f, "day_length must be at least 1 minute"),
            Self::ZeroObsWindow => write!(f, "max_patients_in_obs must be at least 1"),
            Self::ZeroCaseDuration { index } => {
                write!(f, "case {index} has zero duration")
            }
            Self::CaseExceedsDay {
                index,
                duration,
                day_length,
            } => write!(
                f,
                "case {index} duration {duration} exceeds day_length {day_length}"
            ),
            Self::ZeroCaseCount => write!(f, "generator num_cases must be at least 1"),
            Self::ZeroMinDuration => write!(f, "generator min_duration must be at least 1"),
            Self::EmptyDurationRange {
                min_duration,
                max_duration,
            } => write!(
                f,
                "generator duration range is empty: min {min_duration} > max {max_duration}"
            ),
            Self::DurationRangeUnsatisfiable {
                max_duration,
                day_length,
            } => write!(
                f,
                "no feasible arrival window: max_duration {max_duration} + {TURNOVER_MARGIN} \
                 must be below day_length {day_length}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── GeneratorConfig ────────────────────────────────────────────────

/// Configuration for the randomized case generator.
///
/// Only consulted when a reset requests a fresh case list; see
/// [`ResetOptions`](crate::env::ResetOptions).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of cases to generate per episode. Default: 18.
    pub num_cases: usize,
    /// Minimum procedure duration in minutes. Default: 30.
    pub min_duration: u32,
    /// Maximum procedure duration in minutes. Default: 70.
    pub max_duration: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_cases: 18,
            min_duration: 30,
            max_duration: 70,
        }
    }
}

impl GeneratorConfig {
    /// Validate this generator configuration against a day length.
    ///
    /// The `DurationRangeUnsatisfiable` check is the guard against
    /// non-termination: with `max_duration + TURNOVER_MARGIN < day_length`
    /// every sampled duration leaves a non-empty arrival window, so
    /// rejection sampling always makes progress.
    pub fn validate(&self, day_length: u32) -> Result<(), ConfigError> {
        if self.num_cases == 0 {
            return Err(ConfigError::ZeroCaseCount);
        }
        if self.min_duration == 0 {
            return Err(ConfigError::ZeroMinDuration);
        }
        if self.min_duration > self.max_duration {
            return Err(ConfigError::EmptyDurationRange {
                min_duration: self.min_duration,
                max_duration: self.max_duration,
            });
        }
        let feasible = self
            .max_duration
            .checked_add(TURNOVER_MARGIN)
            .map_or(false, |bound| bound < day_length);
        if !feasible {
            return Err(ConfigError::DurationRangeUnsatisfiable {
                max_duration: self.max_duration,
                day_length,
            });
        }
        Ok(())
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a scheduling environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    /// Number of operating rooms. Default: 3.
    pub num_rooms: usize,
    /// Minutes in the simulated working day. Default: 480.
    pub day_length: u32,
    /// Width of the fixed observation/action window. Default: 8.
    pub max_patients_in_obs: usize,
    /// Externally supplied case list; sorted by arrival time internally.
    pub cases: Vec<SurgicalCase>,
    /// Optional generator for randomized per-episode case lists.
    pub generator: Option<GeneratorConfig>,
    /// Optional hard cap on episode length, independent of `day_length`.
    /// When set, reaching the cap without terminating reports the episode
    /// as truncated. Default: `None` (truncation never occurs).
    pub max_episode_steps: Option<u32>,
    /// RNG seed for deterministic case generation.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_rooms: 3,
            day_length: 480,
            max_patients_in_obs: 8,
            cases: Vec::new(),
            generator: None,
            max_episode_steps: None,
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one room.
        if self.num_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        // 2. Day must have at least one minute.
        if self.day_length == 0 {
            return Err(ConfigError::ZeroDayLength);
        }
        // 3. Observation window must admit at least one slot, otherwise
        //    the action space collapses to wait-only.
        if self.max_patients_in_obs == 0 {
            return Err(ConfigError::ZeroObsWindow);
        }
        // 4. Supplied cases must keep the room-counter bound invariant:
        //    a counter is set to the case duration at assignment, so
        //    durations must stay within [1, day_length].
        for (index, case) in self.cases.iter().enumerate() {
            if case.duration == 0 {
                return Err(ConfigError::ZeroCaseDuration { index });
            }
            if case.duration > self.day_length {
                return Err(ConfigError::CaseExceedsDay {
                    index,
                    duration: case.duration,
                    day_length: self.day_length,
                });
            }
        }
        // 5. Generator, when present, must be unable to hang.
        if let Some(generator) = &self.generator {
            generator.validate(self.day_length)?;
        }
        Ok(())
    }
}
