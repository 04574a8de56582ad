use async_trait::async_trait;

use crate::models::user::UserProfile;
use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;
use crate::repositories::profile_repository::{filter_by_game, ProfileRepository};

/// Profile store held in memory, seeded from JSON for local runs and tests.
pub struct InMemoryProfileRepository {
    profiles: Vec<UserProfile>,
}

impl InMemoryProfileRepository {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles }
    }

    /// Loads a JSON array of profiles.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileRepositoryError> {
        let profiles: Vec<UserProfile> = serde_json::from_str(json)
            .map_err(|e| ProfileRepositoryError::Serialization(e.to_string()))?;
        Ok(Self::new(profiles))
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_profile_by_id(
        &self,
        user_id: &str,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        self.profiles
            .iter()
            .find(|p| p.id == user_id)
            .cloned()
            .ok_or(ProfileRepositoryError::NotFound)
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        Ok(self.profiles.clone())
    }

    async fn list_profiles_by_game(
        &self,
        game_name: &str,
    ) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        Ok(filter_by_game(self.profiles.clone(), game_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"[
        {"id":"u1","name":"Ana","games":[{"gameName":"Valorant","rank":"Gold"}]},
        {"id":"u2","name":"Bo","games":[{"gameName":"CS2","rank":"Gold"}],"existingMatches":["u1"]}
    ]"#;

    #[tokio::test]
    async fn test_from_json_str_loads_profiles() {
        let repository = InMemoryProfileRepository::from_json_str(SEED).unwrap();

        let profiles = repository.list_profiles().await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].existing_matches, vec!["u1".to_string()]);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_seed() {
        let result = InMemoryProfileRepository::from_json_str("{not json");

        assert!(matches!(
            result,
            Err(ProfileRepositoryError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_get_profile_by_id_not_found() {
        let repository = InMemoryProfileRepository::from_json_str(SEED).unwrap();

        let result = repository.get_profile_by_id("nobody").await;

        assert!(matches!(result, Err(ProfileRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_from_json_str_accepts_game_without_rank() {
        let seed = r#"[
            {"id":"good","name":"Ana","games":[{"gameName":"LoL","rank":"Gold"}]},
            {"id":"bad","name":"Bo","games":[{"gameName":"LoL"}]}
        ]"#;
        let repository = InMemoryProfileRepository::from_json_str(seed).unwrap();

        let profiles = repository.list_profiles_by_game("LoL").await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].rank_for("LoL"), Some(""));
    }

    #[tokio::test]
    async fn test_list_profiles_by_game() {
        let repository = InMemoryProfileRepository::from_json_str(SEED).unwrap();

        let profiles = repository.list_profiles_by_game("CS2").await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, "u2");
    }
}
