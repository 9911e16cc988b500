//! Core types for the orsim operating-room scheduling environment.
//!
//! This is the leaf crate with zero runtime dependencies. It defines the
//! immutable data model shared by the environment: surgical cases, their
//! urgency levels, room identifiers, and the scheduled-case record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod case;
pub mod id;

pub use case::{ScheduledCase, SurgicalCase, Urgency, TURNOVER_MARGIN};
pub use id::RoomId;
