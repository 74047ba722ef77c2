use actix_web::{delete, post, HttpResponse};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    programs::routes::ProgramPath,
    session::IdentityEx,
};

/// Enroll
///
/// Enrolls the calling member in a program. Enrolling twice is a no-op
/// conflict.
#[utoipa::path(
    params(super::ProgramIdParams),
    responses(
        (status = OK, description = "Enrolled"),
        (status = CONFLICT, description = "Already enrolled"),
        (status = NOT_FOUND, description = "No such program")
    ),
    tag = "programs",
    security(("session" = []))
)]
#[post("/programs/{program_id}/enroll")]
pub async fn enroll(db: DB, identity: IdentityEx, path: ProgramPath) -> HResult<HttpResponse> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM programs WHERE id = $1)")
        .bind(&path.program_id)
        .fetch_one(&db.pool)
        .await?;

    if !exists {
        err!(404, "no_such_program")?;
    }

    let rows_affected = sqlx::query(
        r#"
            INSERT INTO enrollments (user_id, program_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, program_id) DO NOTHING
        "#,
    )
    .bind(&identity.user_id)
    .bind(&path.program_id)
    .execute(&db.pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        return Ok(HttpResponse::Conflict().body("already_enrolled"));
    }

    Ok(HttpResponse::Ok().body("success"))
}

/// Withdraw
///
/// Removes the calling member's enrollment.
#[utoipa::path(
    params(super::ProgramIdParams),
    responses(
        (status = OK, description = "Withdrawn"),
        (status = NOT_FOUND, description = "Not enrolled")
    ),
    tag = "programs",
    security(("session" = []))
)]
#[delete("/programs/{program_id}/enroll")]
pub async fn withdraw(db: DB, identity: IdentityEx, path: ProgramPath) -> HResult<HttpResponse> {
    let rows_affected =
        sqlx::query("DELETE FROM enrollments WHERE user_id = $1 AND program_id = $2")
            .bind(&identity.user_id)
            .bind(&path.program_id)
            .execute(&db.pool)
            .await?
            .rows_affected();

    if rows_affected == 0 {
        err!(404, "not_enrolled")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
