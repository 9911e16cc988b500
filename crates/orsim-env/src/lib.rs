//! Discrete-time operating-room scheduling environment.
//!
//! An agent repeatedly decides whether to place a waiting surgical case
//! into a free room or to wait, as cases arrive stochastically over a
//! fixed-length working day. The environment exposes the standard
//! reset/step/observe contract so external learning algorithms can drive
//! it without knowledge of its internals: actions are scalar integers,
//! observations are fixed-shape snapshots, and illegal actions are
//! penalized through reward rather than rejected.
//!
//! The entry point is [`SchedulingEnv`]; see [`EnvConfig`] for the
//! construction-time knobs and [`reward`] for the shaping terms.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod env;
pub mod generator;
pub mod obs;
pub mod reward;
pub mod state;

pub use action::{action_count, decode, encode, Action};
pub use config::{ConfigError, EnvConfig, GeneratorConfig};
pub use env::{ResetOptions, SchedulingEnv, StepInfo, StepResult};
pub use generator::generate_cases;
pub use obs::Observation;
pub use state::EpisodeState;
