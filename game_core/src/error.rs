//! Error types for the game core.
//!
//! The simulation itself never fails: out-of-range input is clamped and
//! unknown keys are ignored. Only configuration coming from the host can be
//! rejected.

use std::fmt;

/// Configuration could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document was malformed or had a field of the wrong type.
    Parse(serde_json::Error),

    /// A value parsed but falls outside what the simulation can run with.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the constraint.
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "failed to parse config: {err}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_names_field() {
        let err = ConfigError::Invalid {
            field: "ball_radius",
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid config field `ball_radius`: must be positive"
        );
    }

    #[test]
    fn test_parse_error_has_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
