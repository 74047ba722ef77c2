use actix_web::{
    get,
    web::{Json, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    metrics::metric::MetricEntry,
    session::IdentityEx,
};

#[derive(Deserialize, IntoParams)]
pub struct ListEntriesQuery {
    /// Admins may list another member's measurements.
    pub user_id: Option<String>,
}

/// List Metric Entries
///
/// Lists measurements newest-first for the calling user, or for `?user_id=`
/// when called by an admin.
#[utoipa::path(
    params(ListEntriesQuery),
    responses(
        (status = OK, description = "Success", body = Vec<MetricEntry>),
        (status = FORBIDDEN, description = "Access denied")
    ),
    tag = "metrics",
    security(("session" = []))
)]
#[get("/metrics")]
pub async fn list_entries(
    db: DB,
    identity: IdentityEx,
    query: Query<ListEntriesQuery>,
) -> HResult<Json<Vec<MetricEntry>>> {
    let subject = match query.user_id {
        Some(ref other) if other != &identity.user_id => {
            if !identity.role.is_admin() {
                err!(403)?;
            }
            other.as_str()
        }
        _ => identity.user_id.as_str(),
    };

    let entries = sqlx::query_as::<_, MetricEntry>(
        r#"
            SELECT id, user_id, weight_kg, height_cm, body_fat_pct, recorded_at
            FROM metrics
            WHERE user_id = $1
            ORDER BY recorded_at DESC
        "#,
    )
    .bind(subject)
    .fetch_all(&db.pool)
    .await?;

    Ok(Json(entries))
}
