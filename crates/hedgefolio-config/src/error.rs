//! Configuration error types and the `Validate` trait.

use std::fmt;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors loading, saving or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One setting is invalid.
    #[error("invalid setting {0}")]
    Invalid(ValidationError),

    /// Several settings are invalid.
    #[error("{} invalid settings: {}", .0.len(), join(.0))]
    InvalidSettings(Vec<ValidationError>),

    /// Configuration file could not be read or written.
    #[error("IO error on {path}: {message}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        message: String,
    },

    /// TOML text could not be parsed into a configuration.
    #[error("cannot parse configuration: {0}")]
    Parse(String),

    /// Configuration could not be rendered as TOML.
    #[error("cannot render configuration: {0}")]
    Render(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// A single invalid setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the setting, e.g. `analytics.frontier_steps`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
    /// Short name of the violated rule.
    pub rule: Option<&'static str>,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error tagged with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: &'static str,
    ) -> Self {
        Self {
            rule: Some(rule),
            ..Self::new(field, message)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        match self.rule {
            Some(rule) => write!(f, " [{rule}]"),
            None => Ok(()),
        }
    }
}

/// Configuration sections that can check their own settings.
pub trait Validate {
    /// Every invalid setting, empty when the section is valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if nothing is invalid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Folds the validation errors into a [`ConfigError`].
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => match errors.pop() {
                Some(err) => Err(ConfigError::Invalid(err)),
                None => Ok(()),
            },
            _ => Err(ConfigError::InvalidSettings(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_rule() {
        let err = ValidationError::with_rule("analytics.frontier_steps", "must be positive", "min_steps");
        assert_eq!(err.to_string(), "analytics.frontier_steps: must be positive [min_steps]");
        let err = ValidationError::new("data.prices_dir", "empty path");
        assert_eq!(err.to_string(), "data.prices_dir: empty path");
    }

    #[test]
    fn test_multiple_errors_are_joined() {
        let err = ConfigError::InvalidSettings(vec![
            ValidationError::new("a", "x"),
            ValidationError::new("b", "y"),
        ]);
        assert_eq!(err.to_string(), "2 invalid settings: a: x; b: y");
    }
}
