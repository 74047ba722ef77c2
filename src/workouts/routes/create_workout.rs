use actix_web::{post, web::Json};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
};

#[derive(Deserialize, ToSchema)]
pub struct CreateWorkoutRequest {
    #[schema(example = "Push day")]
    title: String,
    /// 0 = Monday .. 6 = Sunday
    day_of_week: i16,
    notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CreateWorkoutResponse {
    workout_id: String,
}

/// Create Workout
///
/// Adds a workout plan entry for the calling user.
#[utoipa::path(
    responses(
        (status = OK, description = "Created", body = CreateWorkoutResponse),
        (status = BAD_REQUEST, description = "Invalid title or day")
    ),
    tag = "workouts",
    security(("session" = []))
)]
#[post("/workouts")]
pub async fn create_workout(
    db: DB,
    identity: IdentityEx,
    req: Json<CreateWorkoutRequest>,
) -> HResult<Json<CreateWorkoutResponse>> {
    if req.title.trim().is_empty() {
        err!(400, "invalid_title")?;
    }
    if !(0..=6).contains(&req.day_of_week) {
        err!(400, "invalid_day")?;
    }

    let workout_id = nanoid!();

    sqlx::query(
        "INSERT INTO workouts (id, user_id, title, day_of_week, notes) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&workout_id)
    .bind(&identity.user_id)
    .bind(req.title.trim())
    .bind(req.day_of_week)
    .bind(req.notes.as_deref().unwrap_or(""))
    .execute(&db.pool)
    .await?;

    Ok(Json(CreateWorkoutResponse { workout_id }))
}
