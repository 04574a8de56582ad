use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordered rank ladders per game, lowest rank first.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct RankTable {
    ladders: HashMap<String, Vec<String>>,
}

const LEAGUE_OF_LEGENDS: &[&str] = &[
    "Hierro",
    "Bronce",
    "Plata",
    "Oro",
    "Platino",
    "Diamante",
    "Maestro",
    "Gran Maestro",
    "Desafiante",
];

const VALORANT: &[&str] = &[
    "Iron", "Bronze", "Silver", "Gold", "Platinum", "Diamond", "Immortal", "Radiant",
];

const OVERWATCH_2: &[&str] = &[
    "Bronze",
    "Silver",
    "Gold",
    "Platinum",
    "Diamond",
    "Master",
    "Grandmaster",
    "Champion",
    "Top 500",
];

const ROCKET_LEAGUE: &[&str] = &[
    "Bronze",
    "Silver",
    "Gold",
    "Platinum",
    "Diamond",
    "Champion",
    "Grand Champion",
    "Supersonic Legend",
];

impl RankTable {
    pub fn empty() -> Self {
        RankTable {
            ladders: HashMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, game_name: &str, ranks: Vec<String>) {
        self.ladders.insert(game_name.to_string(), ranks);
    }

    /// Ladders in `other` replace ladders of the same game.
    pub fn merge(&mut self, other: RankTable) {
        self.ladders.extend(other.ladders);
    }

    pub fn ranks_for(&self, game_name: &str) -> Option<&[String]> {
        self.ladders.get(game_name).map(Vec::as_slice)
    }

    pub fn ordinal(&self, game_name: &str, rank: &str) -> Option<usize> {
        self.ranks_for(game_name)?.iter().position(|r| r == rank)
    }

    pub fn len(&self) -> usize {
        self.ladders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty()
    }
}

impl Default for RankTable {
    fn default() -> Self {
        let mut table = RankTable::empty();
        for (game, ranks) in [
            ("League of Legends", LEAGUE_OF_LEGENDS),
            ("Valorant", VALORANT),
            ("Overwatch 2", OVERWATCH_2),
            ("Rocket League", ROCKET_LEAGUE),
        ] {
            table.insert(game, ranks.iter().map(|r| r.to_string()).collect());
        }
        table
    }
}
