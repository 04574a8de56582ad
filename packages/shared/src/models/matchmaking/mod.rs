pub mod requests;
pub mod responses;

use serde::{Deserialize, Serialize};

use crate::models::user::{GameEntry, UserProfile};

/// Rank shown when a nominally shared game has no rank on one side.
pub const RANK_NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommonGame {
    pub game_name: String,
    pub requester_rank: String,
    pub candidate_rank: String,
}

/// A scored candidate, ready to be returned to the requester.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub games: Vec<GameEntry>,
    pub age: Option<u32>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub match_percentage: u8,
    pub common_games: Vec<CommonGame>,
}

impl MatchResult {
    pub fn new(
        candidate: &UserProfile,
        match_percentage: u8,
        common_games: Vec<CommonGame>,
    ) -> Self {
        MatchResult {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            profile_image: candidate.profile_image.clone(),
            games: candidate.games.clone(),
            age: candidate.age,
            region: candidate.region.clone(),
            description: candidate.description.clone(),
            gender: candidate.gender.clone(),
            match_percentage,
            common_games,
        }
    }
}

/// Result of a matching request. An empty pool is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matches(Vec<MatchResult>),
    NoCompatibleUsers { suggestions: Vec<String> },
}

impl MatchOutcome {
    pub fn matches(&self) -> &[MatchResult] {
        match self {
            MatchOutcome::Matches(matches) => matches,
            MatchOutcome::NoCompatibleUsers { .. } => &[],
        }
    }
}
