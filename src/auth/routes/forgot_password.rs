use actix_web::{post, web::Json, HttpResponse};
use chrono::{Duration, Utc};
use log::info;
use nanoid::nanoid;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{db::DB, error::HResult};

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    email: String,
}

/// Forgot Password
///
/// Creates a one-hour reset token for the account, if it exists. The answer
/// is `success` either way so the endpoint cannot be used to probe for
/// registered emails. No mailer is wired up, the token is written to the log.
#[utoipa::path(
    responses((status = OK, description = "Always succeeds")),
    tag = "auth"
)]
#[post("/auth/forgot-password")]
pub async fn forgot_password(db: DB, req: Json<ForgotPasswordRequest>) -> HResult<HttpResponse> {
    let user_id: Option<String> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&db.pool)
        .await?;

    if let Some(user_id) = user_id {
        let token = nanoid!(48);

        sqlx::query("INSERT INTO password_resets (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&token)
            .bind(&user_id)
            .bind(Utc::now() + Duration::hours(1))
            .execute(&db.pool)
            .await?;

        info!("password reset requested for user {}: token {}", user_id, token);
    }

    Ok(HttpResponse::Ok().body("success"))
}
