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
pub struct CreateProgramRequest {
    #[schema(example = "Beginner Strength")]
    name: String,
    #[schema(example = "Three full-body sessions a week")]
    description: Option<String>,
    duration_weeks: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CreateProgramResponse {
    program_id: String,
}

/// Create Program
///
/// Adds a new training program. Admin only.
#[utoipa::path(
    responses(
        (status = OK, description = "Program created", body = CreateProgramResponse),
        (status = BAD_REQUEST, description = "Invalid name or duration"),
        (status = FORBIDDEN, description = "Access denied")
    ),
    tag = "programs",
    security(("session" = []))
)]
#[post("/programs")]
pub async fn create_program(
    db: DB,
    identity: IdentityEx,
    req: Json<CreateProgramRequest>,
) -> HResult<Json<CreateProgramResponse>> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    if req.name.trim().is_empty() {
        err!(400, "invalid_name")?;
    }
    if !(1..=104).contains(&req.duration_weeks) {
        err!(400, "invalid_duration")?;
    }

    let program_id = nanoid!();

    sqlx::query(
        "INSERT INTO programs (id, name, description, duration_weeks) VALUES ($1, $2, $3, $4)",
    )
    .bind(&program_id)
    .bind(req.name.trim())
    .bind(req.description.as_deref().unwrap_or(""))
    .bind(req.duration_weeks)
    .execute(&db.pool)
    .await?;

    Ok(Json(CreateProgramResponse { program_id }))
}
