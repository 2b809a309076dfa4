//! Exchange draft validation logic

use crate::{ExchangeDraft, GatekeeperError, ValidationConfig};
use giftmatch_domain::{Constraint, Exchange, Participant, ParticipantId, StrengthLevel};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, info, warn};

/// Result of draft validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the draft passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the draft was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Draft accepted
    Accepted,

    /// Draft rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Exchange name is blank
    EmptyExchangeName,

    /// A participant name is blank
    EmptyName {
        /// Position in the participant list (0-based)
        position: usize,
    },

    /// Two participants share a name
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// A participant name starts with a reserved prefix
    ReservedPrefix {
        /// Offending name
        name: String,
        /// Prefix it collides with
        prefix: String,
    },

    /// Not enough distinct participants for a draw
    TooFewParticipants {
        /// Distinct valid names found
        count: usize,
        /// Required minimum
        minimum: usize,
    },

    /// A constraint names somebody who is not participating
    UnknownParticipant {
        /// Name that did not resolve
        name: String,
    },

    /// A constraint pairs a participant with themselves
    SelfConstraint {
        /// Name used on both sides
        name: String,
    },

    /// A constraint uses a level that is not selectable
    UnknownStrengthLevel {
        /// Level text as submitted
        level: String,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::EmptyExchangeName => write!(f, "exchange name is empty"),
            RejectionReason::EmptyName { position } => {
                write!(f, "participant #{} has an empty name", position + 1)
            }
            RejectionReason::DuplicateName { name } => {
                write!(f, "name '{}' is used more than once", name)
            }
            RejectionReason::ReservedPrefix { name, prefix } => {
                write!(f, "name '{}' starts with reserved prefix '{}'", name, prefix)
            }
            RejectionReason::TooFewParticipants { count, minimum } => {
                write!(f, "{} participant(s), at least {} needed", count, minimum)
            }
            RejectionReason::UnknownParticipant { name } => {
                write!(f, "constraint refers to unknown participant '{}'", name)
            }
            RejectionReason::SelfConstraint { name } => {
                write!(f, "constraint pairs '{}' with themselves", name)
            }
            RejectionReason::UnknownStrengthLevel { level } => {
                write!(f, "unknown strength level '{}'", level)
            }
        }
    }
}

/// The Gatekeeper checks exchange drafts before they reach the engine
///
/// The engine assumes clean input; everything a person can get wrong when
/// typing names and picking levels is caught here.
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a draft against the configured rules
    ///
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self, draft: &ExchangeDraft) -> ValidationResult {
        let mut reasons = Vec::new();

        if draft.name.trim().is_empty() {
            reasons.push(RejectionReason::EmptyExchangeName);
        }

        let known = self.check_names(draft, &mut reasons);

        let minimum = self.config.minimum();
        if known.len() < minimum {
            reasons.push(RejectionReason::TooFewParticipants {
                count: known.len(),
                minimum,
            });
        }

        for constraint in &draft.constraints {
            for reason in self.check_constraint(constraint, &known) {
                if !reasons.contains(&reason) {
                    reasons.push(reason);
                }
            }
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        debug!(
            "Validated draft '{}': {:?} with {} reason(s)",
            draft.name,
            status,
            reasons.len()
        );

        ValidationResult { status, reasons }
    }

    /// Validate a draft and turn it into a domain exchange
    ///
    /// Every participant gets a fresh identifier; constraint names resolve to
    /// those identifiers.
    pub fn admit(&self, draft: &ExchangeDraft) -> Result<Exchange, GatekeeperError> {
        let result = self.validate(draft);
        if !result.is_accepted() {
            warn!(
                "Rejected exchange draft '{}' ({} reason(s))",
                draft.name,
                result.reasons.len()
            );
            return Err(GatekeeperError::Rejected(result.reasons));
        }

        let participants: Vec<Participant> = draft
            .participants
            .iter()
            .map(|name| Participant::new(name.trim()))
            .collect();
        let lookup: HashMap<String, ParticipantId> = participants
            .iter()
            .map(|p| (self.normalize(p.name()), p.id()))
            .collect();

        let constraints = draft
            .constraints
            .iter()
            .map(|c| {
                let giver = self.resolve(&lookup, &c.giver)?;
                let giftee = self.resolve(&lookup, &c.giftee)?;
                let level = StrengthLevel::parse(&c.level).ok_or_else(|| {
                    GatekeeperError::Validation(format!("unparsed level '{}'", c.level))
                })?;
                Ok(Constraint::new(giver, giftee, level))
            })
            .collect::<Result<Vec<_>, GatekeeperError>>()?;

        info!(
            "Admitted exchange '{}' with {} participants and {} constraints",
            draft.name.trim(),
            participants.len(),
            constraints.len()
        );

        Ok(Exchange::new(draft.name.trim(), participants, constraints))
    }

    /// Check participant names; returns the normalized set of valid names
    fn check_names(&self, draft: &ExchangeDraft, reasons: &mut Vec<RejectionReason>) -> HashSet<String> {
        let mut known = HashSet::new();

        for (position, raw) in draft.participants.iter().enumerate() {
            let name = raw.trim();
            if name.is_empty() {
                reasons.push(RejectionReason::EmptyName { position });
                continue;
            }

            if let Some(prefix) = self
                .config
                .reserved_prefixes
                .iter()
                .find(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
            {
                reasons.push(RejectionReason::ReservedPrefix {
                    name: name.to_string(),
                    prefix: prefix.clone(),
                });
            }

            if !known.insert(self.normalize(name)) {
                let reason = RejectionReason::DuplicateName {
                    name: name.to_string(),
                };
                if !reasons.contains(&reason) {
                    reasons.push(reason);
                }
            }
        }

        known
    }

    fn check_constraint(
        &self,
        constraint: &crate::ConstraintDraft,
        known: &HashSet<String>,
    ) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();

        for name in [&constraint.giver, &constraint.giftee] {
            if !known.contains(&self.normalize(name)) {
                reasons.push(RejectionReason::UnknownParticipant {
                    name: name.trim().to_string(),
                });
            }
        }

        if self.normalize(&constraint.giver) == self.normalize(&constraint.giftee) {
            reasons.push(RejectionReason::SelfConstraint {
                name: constraint.giver.trim().to_string(),
            });
        }

        // `none` is the resolution default, not something to select
        match StrengthLevel::parse(&constraint.level) {
            Some(StrengthLevel::None) | None => {
                reasons.push(RejectionReason::UnknownStrengthLevel {
                    level: constraint.level.clone(),
                });
            }
            Some(_) => {}
        }

        reasons
    }

    fn resolve(
        &self,
        lookup: &HashMap<String, ParticipantId>,
        name: &str,
    ) -> Result<ParticipantId, GatekeeperError> {
        lookup
            .get(&self.normalize(name))
            .copied()
            .ok_or_else(|| GatekeeperError::Validation(format!("unresolved name '{}'", name)))
    }

    fn normalize(&self, name: &str) -> String {
        let name = name.trim();
        if self.config.case_insensitive_names {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstraintDraft;

    fn draft(participants: &[&str], constraints: Vec<ConstraintDraft>) -> ExchangeDraft {
        ExchangeDraft {
            name: "test".to_string(),
            participants: participants.iter().map(|s| s.to_string()).collect(),
            constraints,
        }
    }

    #[test]
    fn test_clean_draft_is_accepted() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.validate(&draft(
            &["Alice", "Bob", "Carol"],
            vec![ConstraintDraft::new("Alice", "Bob", "never")],
        ));

        assert!(result.is_accepted());
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_name_problems_are_all_reported() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.validate(&draft(&["Alice", "  ", "alice", "_admin"], vec![]));

        assert_eq!(result.status, ValidationStatus::Rejected);
        assert!(result.reasons.contains(&RejectionReason::EmptyName { position: 1 }));
        assert!(result.reasons.contains(&RejectionReason::DuplicateName {
            name: "alice".to_string()
        }));
        assert!(result.reasons.contains(&RejectionReason::ReservedPrefix {
            name: "_admin".to_string(),
            prefix: "_".to_string()
        }));
    }

    #[test]
    fn test_case_sensitive_names_when_permissive() {
        let gatekeeper = Gatekeeper::new(ValidationConfig::permissive());
        let result = gatekeeper.validate(&draft(&["Alice", "alice"], vec![]));

        assert!(result.is_accepted());
    }

    #[test]
    fn test_too_few_participants() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.validate(&draft(&["Solo", ""], vec![]));

        assert!(result.reasons.contains(&RejectionReason::TooFewParticipants {
            count: 1,
            minimum: 2
        }));
    }

    #[test]
    fn test_constraint_problems() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.validate(&draft(
            &["Alice", "Bob"],
            vec![
                ConstraintDraft::new("Alice", "Zed", "never"),
                ConstraintDraft::new("Bob", "bob", "1_past_exchange"),
                ConstraintDraft::new("Alice", "Bob", "none"),
                ConstraintDraft::new("Bob", "Alice", "sometimes"),
            ],
        ));

        assert_eq!(
            result.reasons,
            vec![
                RejectionReason::UnknownParticipant {
                    name: "Zed".to_string()
                },
                RejectionReason::SelfConstraint {
                    name: "Bob".to_string()
                },
                RejectionReason::UnknownStrengthLevel {
                    level: "none".to_string()
                },
                RejectionReason::UnknownStrengthLevel {
                    level: "sometimes".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_admit_resolves_names_to_ids() {
        let gatekeeper = Gatekeeper::default_config();
        let exchange = gatekeeper
            .admit(&draft(
                &[" Alice ", "Bob", "Carol"],
                vec![ConstraintDraft::new("alice", "BOB", "2_past_exchange")],
            ))
            .unwrap();

        let alice = exchange.participant_named("Alice").unwrap();
        let bob = exchange.participant_named("Bob").unwrap();
        assert_eq!(
            exchange.constraints,
            vec![Constraint::new(alice.id(), bob.id(), StrengthLevel::TwoPastExchange)]
        );
        assert!(exchange.matching.is_none());
    }

    #[test]
    fn test_admit_rejects_invalid_draft() {
        let gatekeeper = Gatekeeper::default_config();
        let err = gatekeeper.admit(&draft(&["Alice"], vec![])).unwrap_err();

        match err {
            GatekeeperError::Rejected(reasons) => assert_eq!(reasons.len(), 1),
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_reason_display() {
        let reason = RejectionReason::ReservedPrefix {
            name: "_x".to_string(),
            prefix: "_".to_string(),
        };
        assert_eq!(reason.to_string(), "name '_x' starts with reserved prefix '_'");
    }
}
