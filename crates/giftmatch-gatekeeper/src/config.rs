//! Gatekeeper configuration

/// Configuration for validation rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Name prefixes that participants may not use
    pub reserved_prefixes: Vec<String>,

    /// Treat names differing only in letter case as the same person
    pub case_insensitive_names: bool,

    /// Minimum number of distinct participants (never below 2)
    pub min_participants: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reserved_prefixes: vec!["_".to_string()],
            case_insensitive_names: true,
            min_participants: 2,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (exact-match names, no reserved prefixes)
    pub fn permissive() -> Self {
        Self {
            reserved_prefixes: Vec::new(),
            case_insensitive_names: false,
            min_participants: 2,
        }
    }

    /// Create a strict configuration
    ///
    /// Three participants minimum: with two, every draw is the same swap.
    pub fn strict() -> Self {
        Self {
            reserved_prefixes: vec!["_".to_string(), "#".to_string(), "@".to_string()],
            case_insensitive_names: true,
            min_participants: 3,
        }
    }

    /// Effective participant minimum
    pub fn minimum(&self) -> usize {
        self.min_participants.max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.reserved_prefixes, vec!["_"]);
        assert!(config.case_insensitive_names);
        assert_eq!(config.minimum(), 2);
    }

    #[test]
    fn test_permissive_config() {
        let config = ValidationConfig::permissive();
        assert!(config.reserved_prefixes.is_empty());
        assert!(!config.case_insensitive_names);
    }

    #[test]
    fn test_minimum_never_below_two() {
        let config = ValidationConfig {
            min_participants: 0,
            ..ValidationConfig::default()
        };
        assert_eq!(config.minimum(), 2);
        assert_eq!(ValidationConfig::strict().minimum(), 3);
    }
}
