use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::session::Role;

/// struct containing user info
/// the email field shouldn't be known by users other than this user (or an
/// admin) for privacy reasons
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
