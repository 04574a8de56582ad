use axum::{routing::get, Router};
use lambda_http::{run, Error};
use std::env::set_var;
use std::fs::read_to_string;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::{Config, ProfileStoreKind};
use shared::models::rank::RankTable;
use shared::repositories::memory_profile_repository::InMemoryProfileRepository;
use shared::repositories::profile_repository::{DynamoDbProfileRepository, ProfileRepository};
use shared::services::matchmaking_service::{MatchingConfig, MatchmakingService};

async fn build_repository(
    config: &Config,
) -> Result<Arc<dyn ProfileRepository + Send + Sync>, Error> {
    match config.profile_store {
        ProfileStoreKind::DynamoDb => {
            let aws_config = aws_config::load_from_env().await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            info!("Using DynamoDB profile table {}", config.profiles_table);
            Ok(Arc::new(DynamoDbProfileRepository::new(
                client,
                config.profiles_table.clone(),
            )))
        }
        ProfileStoreKind::Memory => match &config.profile_seed_path {
            Some(path) => {
                let seed = read_to_string(path)?;
                info!("Using in-memory profile store seeded from {}", path);
                Ok(Arc::new(InMemoryProfileRepository::from_json_str(&seed)?))
            }
            None => {
                warn!("PROFILE_SEED_PATH not set, starting with an empty profile store");
                Ok(Arc::new(InMemoryProfileRepository::new(Vec::new())))
            }
        },
    }
}

fn load_rank_table(config: &Config) -> Result<RankTable, Error> {
    let mut rank_table = RankTable::default();
    if let Some(path) = &config.rank_table_path {
        let overrides = RankTable::from_json_str(&read_to_string(path)?)?;
        info!("Loaded {} rank ladders from {}", overrides.len(), path);
        rank_table.merge(overrides);
    }
    Ok(rank_table)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::load();

    // Set up services
    let repository = build_repository(&config).await?;
    let rank_table = load_rank_table(&config)?;
    let matchmaking_service = Arc::new(MatchmakingService::new(
        repository,
        rank_table,
        MatchingConfig {
            rank_window: config.rank_window,
        },
    ));

    let app_state = state::AppState {
        matchmaking_service,
    };

    // ToDo: restrict origins once the client domains are fixed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::matches::routes())
        .layer(cors)
        .with_state(app_state);

    run(app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn memory_config() -> Config {
        Config {
            profile_store: ProfileStoreKind::Memory,
            profiles_table: "profiles".to_string(),
            profile_seed_path: Some(fixture("profiles.json")),
            rank_window: 1,
            rank_table_path: Some(fixture("rank_overrides.json")),
        }
    }

    #[tokio::test]
    async fn test_memory_store_matches_seeded_profiles() {
        let config = memory_config();
        let service = MatchmakingService::new(
            build_repository(&config).await.unwrap(),
            load_rank_table(&config).unwrap(),
            MatchingConfig {
                rank_window: config.rank_window,
            },
        );

        let all_games = service.find_matches("lucia").await.unwrap();
        let valorant = service.find_game_matches("lucia", "Valorant").await.unwrap();

        let ids: Vec<&str> = all_games.matches().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["diego", "sofia"]);
        let ids: Vec<&str> = valorant.matches().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["sofia"]);
    }

    #[tokio::test]
    async fn test_memory_store_without_seed_is_empty() {
        let config = Config {
            profile_seed_path: None,
            ..memory_config()
        };

        let repository = build_repository(&config).await.unwrap();

        assert!(repository.list_profiles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_an_error() {
        let config = Config {
            profile_seed_path: Some(fixture("missing.json")),
            ..memory_config()
        };

        assert!(build_repository(&config).await.is_err());
    }

    #[test]
    fn test_load_rank_table_merges_overrides() {
        let rank_table = load_rank_table(&memory_config()).unwrap();

        assert_eq!(rank_table.ordinal("CS2", "Gold Nova"), Some(1));
        assert_eq!(rank_table.ordinal("Valorant", "Gold"), Some(3));
    }
}
