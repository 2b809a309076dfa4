//! Giftmatch Domain Layer
//!
//! This crate contains the core domain model for drawing gift exchanges.
//! Its only external dependency is `uuid`, and it defines the fundamental
//! value types that the engine, the gatekeeper and the CLI build on.
//!
//! ## Key Concepts
//!
//! - **Participant**: a stable identifier plus a history of display names
//! - **Strength level**: how strongly a pairing should be avoided
//! - **Constraint**: a directed exclusion preference between two participants
//! - **Matching**: the giver → giftee assignments of one exchange
//! - **Exchange**: participants, constraints and (once drawn) the matching
//!
//! ## Architecture
//!
//! - Pure value types and functions only
//! - No randomness, no I/O, no logging
//! - Drawing lives in `giftmatch-engine`, input validation in `giftmatch-gatekeeper`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constraint;
pub mod exchange;
pub mod matching;
pub mod participant;
pub mod strength;

// Re-exports for convenience
pub use constraint::Constraint;
pub use exchange::Exchange;
pub use matching::{Match, Matching};
pub use participant::{Participant, ParticipantId};
pub use strength::StrengthLevel;
