use actix_web::{get, web::Json};

use crate::{
    db::DB,
    error::{macros::err, HResult, IntoHandlerErrorResult},
    session::IdentityEx,
    users::{routes::UserPath, user::User},
};

/// Get User
///
/// Fetches a single account. Members may only fetch themselves, admins may
/// fetch anyone.
#[utoipa::path(
    params(super::UserIdParams),
    responses(
        (status = OK, description = "Success", body = User),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such user")
    ),
    tag = "users",
    security(("session" = []))
)]
#[get("/users/{user_id}")]
pub async fn get_user(db: DB, identity: IdentityEx, path: UserPath) -> HResult<Json<User>> {
    if !identity.role.is_admin() && identity.user_id != path.user_id {
        err!(403)?;
    }

    let user = db.get_user_by_id(&path.user_id).await?.or_err(404)?;

    Ok(Json(user))
}
