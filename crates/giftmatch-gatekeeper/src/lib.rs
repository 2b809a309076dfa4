//! Giftmatch Gatekeeper
//!
//! Validates exchange drafts before they reach the matching engine.
//!
//! The Gatekeeper provides:
//! - Participant name checks (blank, duplicate, reserved prefix)
//! - Participant count checks
//! - Constraint checks (unknown names, self-pairs, unknown strength levels)
//! - Resolution of names into participant identifiers
//!
//! # Examples
//!
//! ```
//! use giftmatch_gatekeeper::{ConstraintDraft, ExchangeDraft, Gatekeeper};
//!
//! let draft = ExchangeDraft {
//!     name: "family-2026".to_string(),
//!     participants: vec!["Alice".into(), "Bob".into(), "Carol".into()],
//!     constraints: vec![ConstraintDraft::new("Alice", "Bob", "1_past_exchange")],
//! };
//!
//! let exchange = Gatekeeper::default_config().admit(&draft).unwrap();
//! assert_eq!(exchange.participants.len(), 3);
//! assert_eq!(exchange.constraints.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod draft;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use draft::{ConstraintDraft, ExchangeDraft};
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};
