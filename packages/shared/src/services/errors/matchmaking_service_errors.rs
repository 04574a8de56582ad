use std::fmt;

use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;

#[derive(Debug)]
pub enum MatchmakingServiceError {
    ValidationError(String),
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for MatchmakingServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchmakingServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            MatchmakingServiceError::UserNotFound => write!(f, "User not found"),
            MatchmakingServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for MatchmakingServiceError {}

impl From<ProfileRepositoryError> for MatchmakingServiceError {
    fn from(error: ProfileRepositoryError) -> Self {
        MatchmakingServiceError::RepositoryError(error.to_string())
    }
}
