use actix_web::{get, web::Json};

use crate::{db::DB, error::HResult, programs::program::Program, session::IdentityEx};

/// List Programs
///
/// Lists every training program. Any authenticated user.
#[utoipa::path(
    responses((status = OK, description = "Success", body = Vec<Program>)),
    tag = "programs",
    security(("session" = []))
)]
#[get("/programs")]
pub async fn list_programs(db: DB, _identity: IdentityEx) -> HResult<Json<Vec<Program>>> {
    let programs = sqlx::query_as::<_, Program>(
        "SELECT id, name, description, duration_weeks, created_at FROM programs ORDER BY created_at DESC",
    )
    .fetch_all(&db.pool)
    .await?;

    Ok(Json(programs))
}
