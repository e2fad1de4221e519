//! Registration error types.

use thiserror::Error;

use crate::method::Method;

/// Errors returned by route registration and method-table operations.
///
/// Route tables are static configuration assembled at startup, so callers
/// typically treat any of these as fatal and abort. Lookup misses are a
/// normal outcome and are never reported through this type; dispatch turns
/// them into a not-found response instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The method string is outside the supported set.
    #[error("unknown or unsupported http method: {0:?}")]
    UnknownMethod(String),

    /// A handler is already bound for this method at this exact position.
    #[error("a {0} handler is already bound at this position")]
    AlreadyBound(Method),

    /// The position is covered by a mounted sub-handler, or mounting was
    /// attempted over a position that already carries routes.
    #[error("conflicting registration: position is mounted or already occupied")]
    StructuralConflict,

    /// An unbind was attempted where no handler was bound.
    #[error("no {0} handler bound at this position")]
    NoHandler(Method),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RouteError::UnknownMethod("BREW".to_owned());
        assert_eq!(err.to_string(), "unknown or unsupported http method: \"BREW\"");

        let err = RouteError::AlreadyBound(Method::Get);
        assert_eq!(err.to_string(), "a GET handler is already bound at this position");

        let err = RouteError::NoHandler(Method::Delete);
        assert_eq!(err.to_string(), "no DELETE handler bound at this position");
    }
}
