use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One user message and the assistant's reply. The log is append-only;
/// history reads return rows ordered by created_at ascending.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRow {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
