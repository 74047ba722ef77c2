use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A training program members can enroll in.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_weeks: i32,
    pub created_at: DateTime<Utc>,
}
