use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors surfaced by the API clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Network failure: {0}")]
    NetworkFailure(String),
}

impl From<FrameworkError> for ApiError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::NetworkFailure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_taxonomy() {
        assert_eq!(
            ApiError::from(FrameworkError::NotFound("5".to_string())),
            ApiError::NotFound("5".to_string())
        );
        assert_eq!(
            ApiError::from(FrameworkError::ActorClosed),
            ApiError::NetworkFailure("Actor closed".to_string())
        );
        assert!(matches!(
            ApiError::from(FrameworkError::AlreadyExists("5".to_string())),
            ApiError::NetworkFailure(_)
        ));
    }
}
