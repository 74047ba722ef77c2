use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A body-metrics measurement a member logged.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct MetricEntry {
    pub id: String,
    pub user_id: String,
    pub weight_kg: f32,
    pub height_cm: f32,
    pub body_fat_pct: Option<f32>,
    pub recorded_at: DateTime<Utc>,
}
