use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use shared::models::matchmaking::requests::MatchesQuery;
use shared::models::matchmaking::responses::MatchesResponse;
use shared::services::errors::matchmaking_service_errors::MatchmakingServiceError;
use tracing::{debug, error, warn};

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/matches", get(get_matches))
}

/// `GET /matches?userId=<id>[&gameId=<game>]`
pub async fn get_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchesQuery>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let user_id = query.user_id.unwrap_or_default();

    let outcome = match query.game_id.as_deref() {
        Some(game_id) => {
            state
                .matchmaking_service
                .find_game_matches(&user_id, game_id)
                .await
        }
        None => state.matchmaking_service.find_matches(&user_id).await,
    }
    .map_err(|e| {
        match &e {
            MatchmakingServiceError::ValidationError(_) | MatchmakingServiceError::UserNotFound => {
                warn!("Rejected match request for '{}': {}", user_id, e)
            }
            MatchmakingServiceError::RepositoryError(_) => {
                error!("Failed to match user {}: {}", user_id, e)
            }
        }
        ApiError::from(e)
    })?;

    debug!(
        "Returning {} matches for user {}",
        outcome.matches().len(),
        user_id
    );
    Ok(Json(MatchesResponse::from(outcome)))
}
