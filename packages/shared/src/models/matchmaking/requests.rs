use serde::{Deserialize, Serialize};

/// Query string of `GET /matches`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesQuery {
    pub user_id: Option<String>,
    pub game_id: Option<String>,
}
