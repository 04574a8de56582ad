use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::matchmaking::{MatchOutcome, MatchResult};
use crate::models::rank::RankTable;
use crate::models::user::UserProfile;
use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;
use crate::repositories::profile_repository::ProfileRepository;
use crate::services::errors::matchmaking_service_errors::MatchmakingServiceError;
use crate::services::rank_filter::{rank_distance, DEFAULT_RANK_WINDOW};
use crate::services::scoring::score;

const MAX_ID_LENGTH: usize = 128;

#[derive(Debug, Clone, Copy)]
pub struct MatchingConfig {
    /// Maximum rank distance accepted by single-game matching.
    pub rank_window: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        MatchingConfig {
            rank_window: DEFAULT_RANK_WINDOW,
        }
    }
}

fn is_eligible(candidate: &UserProfile, requester_id: &str, excluded: &HashSet<&str>) -> bool {
    candidate.id != requester_id && !excluded.contains(candidate.id.as_str())
}

/// Scores every eligible candidate and orders them by descending match percentage.
///
/// The requester and their existing matches are skipped, as are candidates
/// sharing no game. Ties keep the pool's order.
pub fn rank_matches(
    requester_id: &str,
    candidate_pool: &[UserProfile],
    requester: &UserProfile,
) -> Vec<MatchResult> {
    let excluded: HashSet<&str> = requester
        .existing_matches
        .iter()
        .map(String::as_str)
        .collect();

    let mut matches: Vec<MatchResult> = candidate_pool
        .iter()
        .filter(|candidate| is_eligible(candidate, requester_id, &excluded))
        .filter_map(|candidate| score(requester, candidate))
        .collect();

    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}

/// Single-game variant: candidates must hold a rank in `game_name` within
/// `max_distance` of the requester's. Results carry only that game in
/// `common_games`; ties on percentage go to the closer rank, then pool order.
pub fn rank_game_matches(
    requester: &UserProfile,
    candidate_pool: &[UserProfile],
    game_name: &str,
    rank_table: &RankTable,
    max_distance: usize,
) -> Vec<MatchResult> {
    let Some(requester_rank) = requester.rank_for(game_name) else {
        return Vec::new();
    };
    let excluded: HashSet<&str> = requester
        .existing_matches
        .iter()
        .map(String::as_str)
        .collect();

    let mut matches: Vec<(usize, MatchResult)> = candidate_pool
        .iter()
        .filter(|candidate| is_eligible(candidate, &requester.id, &excluded))
        .filter_map(|candidate| {
            let candidate_rank = candidate.rank_for(game_name)?;
            let distance = rank_distance(rank_table, game_name, requester_rank, candidate_rank)
                .filter(|distance| *distance <= max_distance)?;
            let mut result = score(requester, candidate)?;
            result.common_games.retain(|g| g.game_name == game_name);
            Some((distance, result))
        })
        .collect();

    matches.sort_by(|(distance_a, a), (distance_b, b)| {
        b.match_percentage
            .cmp(&a.match_percentage)
            .then(distance_a.cmp(distance_b))
    });
    matches.into_iter().map(|(_, result)| result).collect()
}

fn validate_id<'a>(value: &'a str, field: &str) -> Result<&'a str, MatchmakingServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MatchmakingServiceError::ValidationError(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.chars().count() > MAX_ID_LENGTH {
        return Err(MatchmakingServiceError::ValidationError(format!(
            "{} cannot be longer than {} characters",
            field, MAX_ID_LENGTH
        )));
    }
    Ok(value)
}

#[derive(Clone)]
pub struct MatchmakingService {
    repository: Arc<dyn ProfileRepository + Send + Sync>,
    rank_table: Arc<RankTable>,
    config: MatchingConfig,
}

impl MatchmakingService {
    pub fn new(
        repository: Arc<dyn ProfileRepository + Send + Sync>,
        rank_table: RankTable,
        config: MatchingConfig,
    ) -> Self {
        MatchmakingService {
            repository,
            rank_table: Arc::new(rank_table),
            config,
        }
    }

    async fn get_requester(&self, user_id: &str) -> Result<UserProfile, MatchmakingServiceError> {
        self.repository
            .get_profile_by_id(user_id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => MatchmakingServiceError::UserNotFound,
                _ => MatchmakingServiceError::RepositoryError(e.to_string()),
            })
    }

    /// Ranks the whole population by shared games.
    pub async fn find_matches(
        &self,
        user_id: &str,
    ) -> Result<MatchOutcome, MatchmakingServiceError> {
        let user_id = validate_id(user_id, "User ID")?;
        let requester = self.get_requester(user_id).await?;

        if requester.games.is_empty() {
            info!("User {} has no games listed, skipping matching", user_id);
            return Ok(MatchOutcome::NoCompatibleUsers {
                suggestions: vec!["Add games to your profile".to_string()],
            });
        }

        let candidate_pool = self.repository.list_profiles().await?;
        debug!(
            "Scoring {} candidates for user {}",
            candidate_pool.len(),
            user_id
        );

        let matches = rank_matches(user_id, &candidate_pool, &requester);
        info!("Found {} matches for user {}", matches.len(), user_id);

        if matches.is_empty() {
            return Ok(MatchOutcome::NoCompatibleUsers {
                suggestions: vec![
                    "Add more games to your profile".to_string(),
                    "Check back later for new players".to_string(),
                ],
            });
        }
        Ok(MatchOutcome::Matches(matches))
    }

    /// Ranks players of one game whose rank lies within the configured window.
    pub async fn find_game_matches(
        &self,
        user_id: &str,
        game_id: &str,
    ) -> Result<MatchOutcome, MatchmakingServiceError> {
        let user_id = validate_id(user_id, "User ID")?;
        let game_id = validate_id(game_id, "Game ID")?;
        let requester = self.get_requester(user_id).await?;

        if !requester.plays(game_id) {
            info!("User {} does not list {}, skipping matching", user_id, game_id);
            return Ok(MatchOutcome::NoCompatibleUsers {
                suggestions: vec![format!("Add {} to your profile", game_id)],
            });
        }
        if self.rank_table.ranks_for(game_id).is_none() {
            info!("No rank ladder configured for {}", game_id);
            return Ok(MatchOutcome::NoCompatibleUsers {
                suggestions: vec![
                    format!("Rank matching is not available for {}", game_id),
                    "Try matching across all your games".to_string(),
                ],
            });
        }

        let candidate_pool = self.repository.list_profiles_by_game(game_id).await?;
        debug!(
            "Scoring {} {} players for user {} (window {})",
            candidate_pool.len(),
            game_id,
            user_id,
            self.config.rank_window
        );

        let matches = rank_game_matches(
            &requester,
            &candidate_pool,
            game_id,
            &self.rank_table,
            self.config.rank_window,
        );
        info!(
            "Found {} {} matches for user {}",
            matches.len(),
            game_id,
            user_id
        );

        if matches.is_empty() {
            return Ok(MatchOutcome::NoCompatibleUsers {
                suggestions: vec![
                    "Make sure your rank is up to date".to_string(),
                    "Try matching across all your games".to_string(),
                ],
            });
        }
        Ok(MatchOutcome::Matches(matches))
    }
}
