use thiserror::Error;

/// Errors raised while resolving the test environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    /// Value is not a `<namespace>/<name>` pair
    #[error("environment variable {key} must have the form <namespace>/<name>, got '{value}'")]
    MalformedOcmSecret { key: &'static str, value: String },
    #[error("unknown cluster type '{0}'")]
    UnknownClusterType(String),
    /// A required variable is not set
    #[error("expected environment variable {0} not found")]
    MissingVariable(&'static str),
}
