use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single game a user plays, with the rank label they hold in it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub game_name: String,
    #[serde(default)]
    pub rank: String,
}

impl GameEntry {
    pub fn new(game_name: &str, rank: &str) -> Self {
        GameEntry {
            game_name: game_name.to_string(),
            rank: rank.to_string(),
        }
    }
}

/// Profile record as stored in the profiles table.
/// Display attributes are optional so that partially filled-in registrations still load.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub games: Vec<GameEntry>,
    #[serde(default)]
    pub existing_matches: Vec<String>,
}

impl UserProfile {
    pub fn new(id: &str, name: &str, games: Vec<GameEntry>) -> Self {
        UserProfile {
            id: id.to_string(),
            name: name.to_string(),
            age: None,
            gender: None,
            description: None,
            profile_image: None,
            region: None,
            games,
            existing_matches: Vec::new(),
        }
    }

    pub fn game_names(&self) -> HashSet<&str> {
        self.games.iter().map(|g| g.game_name.as_str()).collect()
    }

    /// Rank held in `game_name`, compared by exact name.
    pub fn rank_for(&self, game_name: &str) -> Option<&str> {
        self.games
            .iter()
            .find(|g| g.game_name == game_name)
            .map(|g| g.rank.as_str())
    }

    pub fn plays(&self, game_name: &str) -> bool {
        self.games.iter().any(|g| g.game_name == game_name)
    }

    pub fn has_matched(&self, user_id: &str) -> bool {
        self.existing_matches.iter().any(|id| id == user_id)
    }
}
