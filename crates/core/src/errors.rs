use thiserror::Error;

use crate::config::ConfigError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("malformed record at position {position}: {message}")]
    MalformedRecord { position: usize, message: String },
    #[error("metric weights sum to {sum} and cannot be normalized")]
    DegenerateWeights { sum: f64 },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("input failure: {0}")]
    Input(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in structured command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::MalformedRecord { .. }) => "malformed_record",
            Self::Domain(DomainError::DegenerateWeights { .. }) => "degenerate_weights",
            Self::Input(_) => "input_read",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 2,
            Self::Input(_) => 3,
            Self::Domain(_) => 4,
        }
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigError;
    use crate::errors::{ApplicationError, DomainError};

    #[test]
    fn malformed_record_keeps_position_in_message() {
        let error = ApplicationError::from(DomainError::MalformedRecord {
            position: 3,
            message: "discount amount must be non-negative".to_owned(),
        });

        assert_eq!(error.error_class(), "malformed_record");
        assert_eq!(error.exit_code(), 4);
        assert!(error.to_string().contains("position 3"));
    }

    #[test]
    fn config_error_maps_to_configuration_class() {
        let error = ApplicationError::from(ConfigError::Validation(
            "scoring.threshold must be finite".to_owned(),
        ));

        assert!(matches!(error, ApplicationError::Configuration(ref message)
            if message.contains("scoring.threshold")));
        assert_eq!(error.error_class(), "config_validation");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn degenerate_weights_map_to_domain_exit_code() {
        let error = ApplicationError::from(DomainError::DegenerateWeights { sum: 0.0 });

        assert_eq!(error.error_class(), "degenerate_weights");
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn input_error_maps_to_input_read() {
        let error = ApplicationError::Input("orders.json: no such file".to_owned());

        assert_eq!(error.error_class(), "input_read");
        assert_eq!(error.exit_code(), 3);
    }
}
