use actix_web::{get, web::Json};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
    users::user::User,
};

/// List Users
///
/// Lists every account. Admin only.
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = Vec<User>),
        (status = FORBIDDEN, description = "Access denied")
    ),
    tag = "users",
    security(("session" = []))
)]
#[get("/users")]
pub async fn list_users(db: DB, identity: IdentityEx) -> HResult<Json<Vec<User>>> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, role, created_at FROM users ORDER BY created_at DESC",
    )
    .fetch_all(&db.pool)
    .await?;

    Ok(Json(users))
}
