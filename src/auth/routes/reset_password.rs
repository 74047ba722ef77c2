use actix_web::{post, web::Json, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    crypto,
    db::DB,
    error::{macros::err, HResult, IntoHandlerErrorResult},
    security,
};

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    token: String,
    password: String,
}

/// Reset Password
///
/// Consumes a reset token issued by forgot-password and replaces the
/// account's password hash. Tokens are single-use and expire after an hour.
#[utoipa::path(
    responses(
        (status = OK, description = "Password replaced"),
        (status = BAD_REQUEST, description = "Invalid new password"),
        (status = FORBIDDEN, description = "Unknown or expired token")
    ),
    tag = "auth"
)]
#[post("/auth/reset-password")]
pub async fn reset_password(db: DB, req: Json<ResetPasswordRequest>) -> HResult<HttpResponse> {
    if !security::validate_password(&req.password) {
        err!(400, "invalid_password")?;
    }

    // deleting and reading in one statement makes the token single-use even
    // under concurrent attempts
    let user_id: Option<String> = sqlx::query_scalar(
        "DELETE FROM password_resets WHERE token = $1 AND expires_at > now() RETURNING user_id",
    )
    .bind(&req.token)
    .fetch_optional(&db.pool)
    .await?;

    let user_id = user_id.or_err_msg(403, "invalid_token")?;

    sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
        .bind(crypto::hash(&req.password))
        .bind(&user_id)
        .execute(&db.pool)
        .await?;

    Ok(HttpResponse::Ok().body("success"))
}
