//! Library error type
//!
//! Both kinds are fatal: they indicate an authoring mistake in the
//! configuration, not a runtime condition.

use std::fmt;

/// A single problem found while validating a galaxy configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field (e.g. `templates.star`)
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalaxyError {
    /// Configuration or body templates are unusable; nothing was generated
    ConfigurationInvalid(Vec<ConfigIssue>),
    /// A sampler or constructor got arguments outside its domain
    ArgumentInvalid(String),
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalaxyError::ConfigurationInvalid(issues) => {
                write!(f, "invalid galaxy configuration ({} issue", issues.len())?;
                if issues.len() != 1 {
                    write!(f, "s")?;
                }
                write!(f, ")")?;
                for issue in issues {
                    write!(f, "; {issue}")?;
                }
                Ok(())
            }
            GalaxyError::ArgumentInvalid(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for GalaxyError {}

pub type Result<T> = std::result::Result<T, GalaxyError>;
