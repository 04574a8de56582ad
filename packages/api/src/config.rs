use std::{env, fmt::Display, str::FromStr};

use shared::services::rank_filter::DEFAULT_RANK_WINDOW;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStoreKind {
    DynamoDb,
    Memory,
}

impl FromStr for ProfileStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(ProfileStoreKind::DynamoDb),
            "memory" => Ok(ProfileStoreKind::Memory),
            other => Err(format!("unknown profile store '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub profile_store: ProfileStoreKind,
    pub profiles_table: String,
    pub profile_seed_path: Option<String>,
    pub rank_window: usize,
    pub rank_table_path: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            profile_store: try_load(&lookup, "PROFILE_STORE", ProfileStoreKind::DynamoDb),
            profiles_table: try_load(&lookup, "PROFILES_TABLE", "profiles".to_string()),
            profile_seed_path: optional(&lookup, "PROFILE_SEED_PATH"),
            rank_window: try_load(&lookup, "MATCH_RANK_WINDOW", DEFAULT_RANK_WINDOW),
            rank_table_path: optional(&lookup, "RANK_TABLE_PATH"),
        }
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Some(raw) = optional(lookup, key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default:?}");
        default
    })
}
