use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A membership payment recorded against a user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Payment {
    pub id: String,
    pub user_id: String,
    /// Stored in cents to avoid float money.
    pub amount_cents: i64,
    #[schema(example = "card")]
    pub method: String,
    pub note: String,
    pub paid_at: DateTime<Utc>,
}
