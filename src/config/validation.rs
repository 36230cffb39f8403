//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check endpoint URLs actually parse
//! - Validate value ranges (payload size, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CheckerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::CheckerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "producer.endpoint").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &CheckerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Url::parse(&config.producer.endpoint) {
        errors.push(ValidationError {
            field: "producer.endpoint".to_string(),
            message: format!("invalid URL: {}", e),
        });
    }

    if let Err(e) = Url::parse(&config.consumer.base_url) {
        errors.push(ValidationError {
            field: "consumer.base_url".to_string(),
            message: format!("invalid URL: {}", e),
        });
    }

    if !config.consumer.outputs_path.starts_with('/') {
        errors.push(ValidationError {
            field: "consumer.outputs_path".to_string(),
            message: "must start with '/'".to_string(),
        });
    }

    if config.producer.payload_size == 0 {
        errors.push(ValidationError {
            field: "producer.payload_size".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.timing.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "timing.request_timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
