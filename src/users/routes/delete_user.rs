use actix_web::{delete, HttpResponse};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
    users::routes::UserPath,
};

/// Delete User
///
/// Removes an account and everything hanging off it (enrollments, workouts,
/// metrics, payments follow via ON DELETE CASCADE). Admin only; an admin
/// cannot delete their own account.
#[utoipa::path(
    params(super::UserIdParams),
    responses(
        (status = OK, description = "Deleted"),
        (status = BAD_REQUEST, description = "Tried to delete own account"),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such user")
    ),
    tag = "users",
    security(("session" = []))
)]
#[delete("/users/{user_id}")]
pub async fn delete_user(db: DB, identity: IdentityEx, path: UserPath) -> HResult<HttpResponse> {
    if !identity.role.is_admin() {
        err!(403)?;
    }
    if identity.user_id == path.user_id {
        err!(400, "cannot_delete_self")?;
    }

    let rows_affected = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(&path.user_id)
        .execute(&db.pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_user")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
