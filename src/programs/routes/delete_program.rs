use actix_web::{delete, HttpResponse};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    programs::routes::ProgramPath,
    session::IdentityEx,
};

/// Delete Program
///
/// Removes a program and its enrollments. Admin only.
#[utoipa::path(
    params(super::ProgramIdParams),
    responses(
        (status = OK, description = "Deleted"),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such program")
    ),
    tag = "programs",
    security(("session" = []))
)]
#[delete("/programs/{program_id}")]
pub async fn delete_program(db: DB, identity: IdentityEx, path: ProgramPath) -> HResult<HttpResponse> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    let rows_affected = sqlx::query("DELETE FROM programs WHERE id = $1")
        .bind(&path.program_id)
        .execute(&db.pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_program")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
