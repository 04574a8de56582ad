use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::matchmaking::responses::ErrorResponse;
use shared::services::errors::matchmaking_service_errors::MatchmakingServiceError;

#[derive(Debug)]
pub enum ApiError {
    MatchmakingService(MatchmakingServiceError),
}

impl From<MatchmakingServiceError> for ApiError {
    fn from(error: MatchmakingServiceError) -> Self {
        ApiError::MatchmakingService(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MatchmakingService(MatchmakingServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MatchmakingService(MatchmakingServiceError::UserNotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::MatchmakingService(MatchmakingServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::MatchmakingService(MatchmakingServiceError::RepositoryError(_)) => {
                "Profile store unavailable".to_string()
            }
            ApiError::MatchmakingService(e) => e.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::from(MatchmakingServiceError::ValidationError("bad".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(MatchmakingServiceError::UserNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(MatchmakingServiceError::RepositoryError("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ApiError::from(MatchmakingServiceError::UserNotFound).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
