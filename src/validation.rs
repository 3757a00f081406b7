//! # Input Validation
//!
//! Validation limits and checks for submitted precedence pairs. The
//! configuration is immutable after startup and travels through the
//! application state, so request handling never touches global validator
//! state.

use serde::Serialize;
use thiserror::Error;

use crate::graph::PrecedencePair;

/// Maximum number of pairs accepted in a single submission
const MAX_PAIRS: usize = 10_000;

/// Maximum length of a node identifier in characters
const MAX_IDENTIFIER_LENGTH: usize = 256;

/// Validation failures reported back to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("pairs must not be empty")]
    EmptyPairs,

    #[error("pair at index {index}: 'from' must be a non-empty identifier")]
    MissingFrom { index: usize },

    #[error("pair at index {index}: 'to' must be a non-empty identifier")]
    MissingTo { index: usize },

    #[error("too many pairs: {count} (max: {max})")]
    TooManyPairs { count: usize, max: usize },

    #[error("pair at index {index}: identifier too long: {length} characters (max: {max})")]
    IdentifierTooLong {
        index: usize,
        length: usize,
        max: usize,
    },
}

/// Immutable validation limits, constructed once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationConfig {
    pub max_pairs: usize,
    pub max_identifier_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_pairs: MAX_PAIRS,
            max_identifier_length: MAX_IDENTIFIER_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Validate a submitted pair list.
    ///
    /// The list must be non-empty and within the configured pair limit, and
    /// every pair must carry non-empty identifiers within the length limit.
    /// The first violation found is returned.
    pub fn validate_pairs(&self, pairs: &[PrecedencePair]) -> Result<(), ValidationError> {
        if pairs.is_empty() {
            return Err(ValidationError::EmptyPairs);
        }

        if pairs.len() > self.max_pairs {
            return Err(ValidationError::TooManyPairs {
                count: pairs.len(),
                max: self.max_pairs,
            });
        }

        for (index, pair) in pairs.iter().enumerate() {
            if pair.from.is_empty() {
                return Err(ValidationError::MissingFrom { index });
            }
            if pair.to.is_empty() {
                return Err(ValidationError::MissingTo { index });
            }

            for identifier in [&pair.from, &pair.to] {
                let length = identifier.chars().count();
                if length > self.max_identifier_length {
                    return Err(ValidationError::IdentifierTooLong {
                        index,
                        length,
                        max: self.max_identifier_length,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_pairs() {
        let config = ValidationConfig::default();
        let pairs = vec![
            PrecedencePair::new("BTC", "ETH"),
            PrecedencePair::new("ETH", "XRP"),
        ];
        assert!(config.validate_pairs(&pairs).is_ok());
    }

    #[test]
    fn rejects_empty_list() {
        let config = ValidationConfig::default();
        assert_eq!(config.validate_pairs(&[]), Err(ValidationError::EmptyPairs));
    }

    #[test]
    fn rejects_empty_from() {
        let config = ValidationConfig::default();
        let pairs = vec![
            PrecedencePair::new("A", "B"),
            PrecedencePair::new("", "C"),
        ];
        assert_eq!(
            config.validate_pairs(&pairs),
            Err(ValidationError::MissingFrom { index: 1 })
        );
    }

    #[test]
    fn rejects_empty_to() {
        let config = ValidationConfig::default();
        let pairs = vec![PrecedencePair::new("A", "")];
        assert_eq!(
            config.validate_pairs(&pairs),
            Err(ValidationError::MissingTo { index: 0 })
        );
    }

    #[test]
    fn rejects_oversized_submissions() {
        let config = ValidationConfig {
            max_pairs: 2,
            ..ValidationConfig::default()
        };
        let pairs = vec![
            PrecedencePair::new("A", "B"),
            PrecedencePair::new("B", "C"),
            PrecedencePair::new("C", "D"),
        ];
        assert_eq!(
            config.validate_pairs(&pairs),
            Err(ValidationError::TooManyPairs { count: 3, max: 2 })
        );
    }

    #[test]
    fn rejects_overlong_identifiers() {
        let config = ValidationConfig {
            max_identifier_length: 4,
            ..ValidationConfig::default()
        };
        let pairs = vec![PrecedencePair::new("ABCDE", "B")];
        assert_eq!(
            config.validate_pairs(&pairs),
            Err(ValidationError::IdentifierTooLong {
                index: 0,
                length: 5,
                max: 4
            })
        );
    }

    #[test]
    fn error_messages_are_client_readable() {
        assert_eq!(
            ValidationError::MissingFrom { index: 3 }.to_string(),
            "pair at index 3: 'from' must be a non-empty identifier"
        );
        assert_eq!(ValidationError::EmptyPairs.to_string(), "pairs must not be empty");
    }
}
