//! Error types for descriptor construction.

use thiserror::Error;

/// Errors raised while building model descriptors.
///
/// A type without writable members or public constructors is not an error;
/// it simply produces empty descriptor lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A required argument was absent or unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl BindingError {
    /// The name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            BindingError::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Result alias used throughout the modelbind crates.
pub type BindingResult<T> = Result<T, BindingError>;
