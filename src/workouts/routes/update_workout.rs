use actix_web::{patch, web::Json, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
    workouts::routes::WorkoutPath,
};

#[derive(Deserialize, ToSchema)]
pub struct UpdateWorkoutRequest {
    title: Option<String>,
    day_of_week: Option<i16>,
    notes: Option<String>,
}

/// Update Workout
///
/// Edits one of the calling user's workout entries. The WHERE clause scopes
/// the update to the owner, so someone else's id just comes back not-found.
#[utoipa::path(
    params(super::WorkoutIdParams),
    responses(
        (status = OK, description = "Updated"),
        (status = BAD_REQUEST, description = "Invalid field"),
        (status = NOT_FOUND, description = "No such workout")
    ),
    tag = "workouts",
    security(("session" = []))
)]
#[patch("/workouts/{workout_id}")]
pub async fn update_workout(
    db: DB,
    identity: IdentityEx,
    path: WorkoutPath,
    req: Json<UpdateWorkoutRequest>,
) -> HResult<HttpResponse> {
    if let Some(ref title) = req.title {
        if title.trim().is_empty() {
            err!(400, "invalid_title")?;
        }
    }
    if let Some(day) = req.day_of_week {
        if !(0..=6).contains(&day) {
            err!(400, "invalid_day")?;
        }
    }

    let rows_affected = sqlx::query(
        r#"
            UPDATE workouts
            SET title = COALESCE($1, title),
                day_of_week = COALESCE($2, day_of_week),
                notes = COALESCE($3, notes)
            WHERE id = $4 AND user_id = $5
        "#,
    )
    .bind(req.title.as_deref().map(str::trim))
    .bind(req.day_of_week)
    .bind(req.notes.as_deref())
    .bind(&path.workout_id)
    .bind(&identity.user_id)
    .execute(&db.pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_workout")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
