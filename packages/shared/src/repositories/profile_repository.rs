use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::from_item;
use tracing::{debug, warn};

use crate::models::user::UserProfile;
use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Read access to stored user profiles.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile_by_id(&self, user_id: &str) -> Result<UserProfile, ProfileRepositoryError>;
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileRepositoryError>;
    async fn list_profiles_by_game(
        &self,
        game_name: &str,
    ) -> Result<Vec<UserProfile>, ProfileRepositoryError>;
}

/// Keeps only the profiles listing `game_name`, preserving order.
pub fn filter_by_game(profiles: Vec<UserProfile>, game_name: &str) -> Vec<UserProfile> {
    profiles
        .into_iter()
        .filter(|profile| profile.plays(game_name))
        .collect()
}

/// Maps scanned items to profiles. Items that fail to map are logged and
/// skipped so the rest of the pool can still be ranked.
pub fn profiles_from_items(items: Vec<HashMap<String, AttributeValue>>) -> Vec<UserProfile> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item
                .get("id")
                .and_then(|value| value.as_s().ok())
                .cloned()
                .unwrap_or_default();
            let profile: Result<UserProfile, _> = from_item(item);
            match profile {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Skipping unreadable profile {:?}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

pub struct DynamoDbProfileRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbProfileRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl ProfileRepository for DynamoDbProfileRepository {
    async fn get_profile_by_id(
        &self,
        user_id: &str,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(|e| ProfileRepositoryError::DynamoDb(e.to_string()))?;
        if let Some(item) = output.item {
            let profile: UserProfile =
                from_item(item).map_err(|e| ProfileRepositoryError::Serialization(e.to_string()))?;
            Ok(profile)
        } else {
            Err(ProfileRepositoryError::NotFound)
        }
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        let mut profiles = Vec::new();
        let mut start_key = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| ProfileRepositoryError::DynamoDb(e.to_string()))?;

            profiles.extend(profiles_from_items(output.items.unwrap_or_default()));

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }
        debug!(
            "Scanned {} profiles from {}",
            profiles.len(),
            self.table_name
        );
        Ok(profiles)
    }

    async fn list_profiles_by_game(
        &self,
        game_name: &str,
    ) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        // Games are a nested list, so the filter runs over the scanned pool.
        let profiles = self.list_profiles().await?;
        Ok(filter_by_game(profiles, game_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::GameEntry;

    #[test]
    fn test_filter_by_game_keeps_order_and_exact_names() {
        let profiles = vec![
            UserProfile::new("u1", "Ana", vec![GameEntry::new("Valorant", "Gold")]),
            UserProfile::new("u2", "Bo", vec![GameEntry::new("valorant", "Gold")]),
            UserProfile::new("u3", "Cy", vec![GameEntry::new("CS2", "Gold")]),
            UserProfile::new(
                "u4",
                "Di",
                vec![
                    GameEntry::new("CS2", "Gold"),
                    GameEntry::new("Valorant", "Iron"),
                ],
            ),
        ];

        let filtered = filter_by_game(profiles, "Valorant");

        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u4"]);
    }

    fn attr(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    fn game_item(game_name: &str, rank: Option<&str>) -> AttributeValue {
        let mut game = HashMap::from([("gameName".to_string(), attr(game_name))]);
        if let Some(rank) = rank {
            game.insert("rank".to_string(), attr(rank));
        }
        AttributeValue::M(game)
    }

    #[test]
    fn test_profiles_from_items_skips_unreadable_items() {
        let items = vec![
            HashMap::from([
                ("id".to_string(), attr("u1")),
                ("name".to_string(), attr("Ana")),
                (
                    "games".to_string(),
                    AttributeValue::L(vec![game_item("LoL", Some("Gold"))]),
                ),
            ]),
            HashMap::from([
                ("name".to_string(), attr("No id")),
                (
                    "games".to_string(),
                    AttributeValue::L(vec![game_item("LoL", Some("Gold"))]),
                ),
            ]),
            HashMap::from([
                ("id".to_string(), attr("u3")),
                (
                    "games".to_string(),
                    AttributeValue::L(vec![game_item("LoL", None)]),
                ),
            ]),
        ];

        let profiles = profiles_from_items(items);

        let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u3"]);
        assert_eq!(profiles[1].rank_for("LoL"), Some(""));
    }

    #[tokio::test]
    async fn test_profile_repository_can_be_mocked() {
        let mut mock_repo = MockProfileRepository::new();
        mock_repo
            .expect_get_profile_by_id()
            .returning(|_| Err(ProfileRepositoryError::NotFound));

        let repo: &dyn ProfileRepository = &mock_repo;
        let result = repo.get_profile_by_id("missing").await;

        assert!(matches!(result, Err(ProfileRepositoryError::NotFound)));
    }
}
