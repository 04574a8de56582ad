use serde::{Deserialize, Serialize};

use crate::models::matchmaking::{MatchOutcome, MatchResult};

pub const NO_MATCHES_MESSAGE: &str = "No compatible users found";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NoMatchesResponse {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Body of a successful `GET /matches`: the ranked array, or a message with suggestions.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MatchesResponse {
    Matches(Vec<MatchResult>),
    NoMatches(NoMatchesResponse),
}

impl From<MatchOutcome> for MatchesResponse {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Matches(matches) => MatchesResponse::Matches(matches),
            MatchOutcome::NoCompatibleUsers { suggestions } => {
                MatchesResponse::NoMatches(NoMatchesResponse {
                    message: NO_MATCHES_MESSAGE.to_string(),
                    suggestions,
                })
            }
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_compatible_users_serializes_as_message() {
        let response = MatchesResponse::from(MatchOutcome::NoCompatibleUsers {
            suggestions: vec!["Add more games to your profile".to_string()],
        });

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], NO_MATCHES_MESSAGE);
        assert_eq!(value["suggestions"][0], "Add more games to your profile");
    }

    #[test]
    fn test_matches_serialize_as_array() {
        let response = MatchesResponse::from(MatchOutcome::Matches(vec![]));

        let value = serde_json::to_value(&response).unwrap();

        assert!(value.is_array());
    }
}
