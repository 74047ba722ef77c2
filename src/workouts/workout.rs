use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One entry of a member's weekly workout plan.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Workout {
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: i16,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}
