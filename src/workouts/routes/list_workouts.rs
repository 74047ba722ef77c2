use actix_web::{
    get,
    web::{Json, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
    workouts::workout::Workout,
};

#[derive(Deserialize, IntoParams)]
pub struct ListWorkoutsQuery {
    /// Admins may list another member's plan.
    pub user_id: Option<String>,
}

/// List Workouts
///
/// Lists the calling user's workout plan, ordered by day. Admins may pass
/// `?user_id=` to inspect any member's plan.
#[utoipa::path(
    params(ListWorkoutsQuery),
    responses(
        (status = OK, description = "Success", body = Vec<Workout>),
        (status = FORBIDDEN, description = "Access denied")
    ),
    tag = "workouts",
    security(("session" = []))
)]
#[get("/workouts")]
pub async fn list_workouts(
    db: DB,
    identity: IdentityEx,
    query: Query<ListWorkoutsQuery>,
) -> HResult<Json<Vec<Workout>>> {
    let subject = match query.user_id {
        Some(ref other) if other != &identity.user_id => {
            if !identity.role.is_admin() {
                err!(403)?;
            }
            other.as_str()
        }
        _ => identity.user_id.as_str(),
    };

    let workouts = sqlx::query_as::<_, Workout>(
        r#"
            SELECT id, user_id, title, day_of_week, notes, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY day_of_week, created_at
        "#,
    )
    .bind(subject)
    .fetch_all(&db.pool)
    .await?;

    Ok(Json(workouts))
}
