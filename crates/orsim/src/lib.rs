//! Orsim: a discrete-time operating-room scheduling environment for
//! reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the orsim sub-crates. For most users, adding `orsim` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use orsim::prelude::*;
//!
//! // One room, one routine case arriving at minute zero.
//! let config = EnvConfig {
//!     num_rooms: 1,
//!     max_patients_in_obs: 1,
//!     cases: vec![SurgicalCase {
//!         duration: 30,
//!         arrival_time: 0,
//!         urgency: Urgency::Routine,
//!     }],
//!     ..EnvConfig::default()
//! };
//!
//! let mut env = SchedulingEnv::new(config).unwrap();
//! let (obs, _info) = env.reset(ResetOptions::default());
//! assert_eq!(obs.num_waiting, 0);
//!
//! // Scalar actions: with one room and a window of one, action 0 is
//! // (room 0, slot 0) and action 1 is the wait sentinel.
//! let result = env.step(0);
//! assert_eq!(result.reward, 60.0);
//! assert!(!result.terminated);
//!
//! // Stepping on drains the room; the episode ends when all work is
//! // finished and every room is idle.
//! let mut last = result;
//! while !last.terminated {
//!     let wait = (env.action_count() - 1) as u32;
//!     last = env.step(wait);
//! }
//! assert_eq!(env.state().completed.len(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orsim-core` | Cases, urgency levels, room IDs |
//! | [`env`] | `orsim-env` | Environment, config, codec, observations, reward shaping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core case and room types (`orsim-core`).
pub use orsim_core as types;

/// Environment, configuration, and codecs (`orsim-env`).
pub use orsim_env as env;

/// Commonly used items, re-exported for glob import.
pub mod prelude {
    pub use orsim_core::{RoomId, ScheduledCase, SurgicalCase, Urgency, TURNOVER_MARGIN};
    pub use orsim_env::{
        action_count, decode, encode, Action, ConfigError, EnvConfig, EpisodeState,
        GeneratorConfig, Observation, ResetOptions, SchedulingEnv, StepInfo, StepResult,
    };
}
