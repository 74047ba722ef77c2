use actix_web::{delete, HttpResponse};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
    workouts::routes::WorkoutPath,
};

/// Delete Workout
///
/// Removes one of the calling user's workout entries.
#[utoipa::path(
    params(super::WorkoutIdParams),
    responses(
        (status = OK, description = "Deleted"),
        (status = NOT_FOUND, description = "No such workout")
    ),
    tag = "workouts",
    security(("session" = []))
)]
#[delete("/workouts/{workout_id}")]
pub async fn delete_workout(
    db: DB,
    identity: IdentityEx,
    path: WorkoutPath,
) -> HResult<HttpResponse> {
    let rows_affected = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
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
