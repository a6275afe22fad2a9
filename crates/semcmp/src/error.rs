//! Error type for version parsing

use thiserror::Error;

/// Reasons a version string can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version input type: expected a string, got {input}")]
    InvalidInputType { input: String },
    #[error("Invalid version string \"{version}\": missing or malformed major.minor.patch core")]
    EmptyOrMalformedCore { version: String },
    #[error("Invalid version string \"{version}\": malformed prerelease or build metadata")]
    InvalidPrereleaseOrBuildFormat { version: String },
}

impl ParseError {
    /// The offending input as it was handed to the parser
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidInputType { input } => input,
            ParseError::EmptyOrMalformedCore { version } => version,
            ParseError::InvalidPrereleaseOrBuildFormat { version } => version,
        }
    }
}
