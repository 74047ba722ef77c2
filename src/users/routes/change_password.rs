use actix_web::{post, web::Json, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    crypto,
    db::DB,
    error::{macros::err, HResult, IntoHandlerErrorResult},
    security,
    session::IdentityEx,
};

#[derive(Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

/// Change Password
///
/// Replaces the caller's own password. Requires the current password even
/// with a valid session, so a stolen browser session alone is not enough.
#[utoipa::path(
    responses(
        (status = OK, description = "Password changed"),
        (status = BAD_REQUEST, description = "Invalid new password"),
        (status = FORBIDDEN, description = "Current password did not match")
    ),
    tag = "users",
    security(("session" = []))
)]
#[post("/users/password")]
pub async fn change_password(
    db: DB,
    identity: IdentityEx,
    req: Json<ChangePasswordRequest>,
) -> HResult<HttpResponse> {
    if !security::validate_password(&req.new_password) {
        err!(400, "invalid_password")?;
    }

    let current_hash: Option<String> = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
        .bind(&identity.user_id)
        .fetch_optional(&db.pool)
        .await?;

    let current_hash = current_hash.or_err(401)?;

    if !crypto::verify(&req.current_password, &current_hash) {
        err!(403, "wrong_password")?;
    }

    sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
        .bind(crypto::hash(&req.new_password))
        .bind(&identity.user_id)
        .execute(&db.pool)
        .await?;

    Ok(HttpResponse::Ok().body("success"))
}
