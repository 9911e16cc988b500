//! The scheduling environment: reset, step, and termination.
//!
//! [`SchedulingEnv`] is the user-facing API. Each [`step()`](SchedulingEnv::step)
//! call advances the clock one minute, admits arrivals, classifies and
//! applies the requested assignment, sums the shaped reward, and checks
//! termination — all synchronously, with no suspension points.
//!
//! # Ownership model
//!
//! A `SchedulingEnv` exclusively owns its episode state. All mutating
//! methods take `&mut self`, so the borrow checker rules out concurrent
//! episodes over shared state; parallel episodes are independent
//! instances.
//!
//! # Totality
//!
//! `step` and `reset` never fail. Illegal or out-of-range actions are
//! accepted and penalized through reward (see [`crate::reward`]) so a
//! learning process only ever adjusts behavior, never handles errors.
//! The single fallible surface is [`SchedulingEnv::new`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orsim_core::{RoomId, SurgicalCase};

use crate::action::{self, Action};
use crate::config::{ConfigError, EnvConfig};
use crate::generator;
use crate::obs::Observation;
use crate::reward;
use crate::state::EpisodeState;

// ── Step results ────────────────────────────────────────────────

/// Empty side-channel info returned by `reset` and `step`.
///
/// Exists to keep the external contract shape-stable; marked
/// non-exhaustive so diagnostic fields can be added without breakage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StepInfo {}

/// Result of one [`SchedulingEnv::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// Fixed-shape snapshot of the post-step state.
    pub observation: Observation,
    /// Sum of all shaped reward components for this step.
    pub reward: f64,
    /// The day ended or all work finished early.
    pub terminated: bool,
    /// The optional episode-length cap was reached first.
    pub truncated: bool,
    /// Empty side channel.
    pub info: StepInfo,
}

/// Options for [`SchedulingEnv::reset()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetOptions {
    /// Reseed the environment RNG before any sampling. `None` keeps the
    /// current RNG stream.
    pub seed: Option<u64>,
    /// Draw a fresh case list through the configured generator instead
    /// of reusing the active one. Requires a generator in the config;
    /// without one the supplied list is reused.
    pub regenerate: bool,
}

// ── SchedulingEnv ───────────────────────────────────────────────

/// Discrete-time operating-room scheduling environment.
///
/// # Example
///
/// ```
/// use orsim_core::{SurgicalCase, Urgency};
/// use orsim_env::{EnvConfig, ResetOptions, SchedulingEnv};
///
/// let config = EnvConfig {
///     num_rooms: 1,
///     max_patients_in_obs: 1,
///     cases: vec![SurgicalCase {
///         duration: 30,
///         arrival_time: 0,
///         urgency: Urgency::Routine,
///     }],
///     ..EnvConfig::default()
/// };
/// let mut env = SchedulingEnv::new(config).unwrap();
/// let (obs, _info) = env.reset(ResetOptions::default());
/// assert_eq!(obs.time, 0);
///
/// // Scalar 0 decodes to (room 0, slot 0): a legal assignment.
/// let result = env.step(0);
/// assert_eq!(result.reward, 60.0);
/// assert_eq!(result.observation.rooms, vec![30]);
/// ```
#[derive(Clone, Debug)]
pub struct SchedulingEnv {
    config: EnvConfig,
    /// Case list for the current and subsequent episodes; replaced when
    /// a reset regenerates.
    active_cases: Vec<SurgicalCase>,
    state: EpisodeState,
    rng: ChaCha8Rng,
}

impl SchedulingEnv {
    /// Create an environment from a validated configuration.
    ///
    /// The supplied case list is sorted by arrival time, the RNG is
    /// seeded from `config.seed`, and the initial episode state is
    /// ready; callers still follow the usual contract of calling
    /// [`reset()`](Self::reset) before the first step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any structural invariant fails,
    /// including the generator range check that guards against
    /// non-terminating sampling.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut active_cases = config.cases.clone();
        active_cases.sort_by_key(|case| case.arrival_time);
        let state = EpisodeState::new(config.num_rooms, active_cases.clone());
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            active_cases,
            state,
            rng,
        })
    }

    /// Start a new episode, rebuilding the state wholesale.
    ///
    /// Equal seeds with no regeneration reproduce identical initial
    /// observations and identical subsequent episodes; with
    /// regeneration, equal seeds reproduce identical case lists.
    pub fn reset(&mut self, options: ResetOptions) -> (Observation, StepInfo) {
        if let Some(seed) = options.seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        if options.regenerate {
            if let Some(generator_config) = &self.config.generator {
                // Validated at construction, so sampling terminates.
                self.active_cases = generator::sample_cases(
                    generator_config,
                    self.config.day_length,
                    &mut self.rng,
                );
            }
        }
        self.state = EpisodeState::new(self.config.num_rooms, self.active_cases.clone());
        (self.observe(), StepInfo::default())
    }

    /// Advance the simulation by one minute under the given action.
    ///
    /// The scalar action is decoded as
    /// `(room = action / window, slot = action % window)` with
    /// `room == num_rooms` meaning wait. Effects are applied atomically
    /// in a fixed order: time advance, arrival admission, legality
    /// classification (with assignment on the legal branch), ambient
    /// urgency pressure, termination check.
    pub fn step(&mut self, raw_action: u32) -> StepResult {
        let decoded = action::decode(
            raw_action,
            self.config.num_rooms,
            self.config.max_patients_in_obs,
        );

        self.state.advance_minute();
        self.state.admit_arrivals();

        let mut reward = 0.0;
        match decoded {
            Action::Wait if self.state.waiting.is_empty() => {}
            Action::Assign { .. } if self.state.waiting.is_empty() => {
                reward -= reward::SPURIOUS_ASSIGN_PENALTY;
            }
            Action::Wait => reward -= reward::IDLE_PENALTY,
            Action::Assign { room, slot } if self.is_legal(room, slot) => {
                let case = self.state.waiting[slot];
                let waiting_time = case.waiting_time(self.state.time);
                let finish = self.state.time.saturating_add(case.duration);
                let overrun = finish.saturating_sub(self.config.day_length);
                reward += reward::assignment_delta(&case, waiting_time, overrun);
                self.state.place(room, slot);
            }
            Action::Assign { .. } => reward -= reward::INVALID_ACTION_PENALTY,
        }

        reward -= reward::urgency_pressure(&self.state.waiting, self.state.time);

        let terminated = self.state.time >= self.config.day_length
            || (self.state.work_exhausted() && self.state.all_rooms_idle());
        if terminated {
            reward -= reward::unassigned_penalty(&self.state.waiting);
        }
        let truncated = !terminated
            && self
                .config
                .max_episode_steps
                .is_some_and(|cap| self.state.time >= cap);

        StepResult {
            observation: self.observe(),
            reward,
            terminated,
            truncated,
            info: StepInfo::default(),
        }
    }

    /// Fixed-shape snapshot of the current state.
    pub fn observe(&self) -> Observation {
        Observation::capture(&self.state, self.config.max_patients_in_obs)
    }

    /// Read access to the full episode state.
    pub fn state(&self) -> &EpisodeState {
        &self.state
    }

    /// The configuration this environment was built from.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Size of the flat action space,
    /// `(num_rooms + 1) * max_patients_in_obs`.
    pub fn action_count(&self) -> usize {
        action::action_count(self.config.num_rooms, self.config.max_patients_in_obs)
    }

    fn is_legal(&self, room: RoomId, slot: usize) -> bool {
        room.0 < self.config.num_rooms
            && self.state.rooms[room.0] == 0
            && slot < self.state.waiting.len()
    }
}
