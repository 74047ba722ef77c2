use actix_web::{post, web::Json, HttpResponse};
use nanoid::nanoid;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    crypto,
    db::DB,
    error::{macros::err, HResult},
    security,
    session::Role,
};

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Jane Doe")]
    name: String,
    #[schema(example = "member@example.com")]
    email: String,
    password: String,
}

/// Register
///
/// Creates a new MEMBER account. Admin accounts are promoted by an existing
/// admin, never self-registered.
#[utoipa::path(
    responses(
        (status = OK, description = "Account created"),
        (status = BAD_REQUEST, description = "Invalid name, email or password"),
        (status = CONFLICT, description = "Email already registered")
    ),
    tag = "auth"
)]
#[post("/auth/register")]
pub async fn register(db: DB, req: Json<RegisterRequest>) -> HResult<HttpResponse> {
    if !security::validate_display_name(&req.name) {
        err!(400, "invalid_name")?;
    }
    if !security::validate_email(&req.email) {
        err!(400, "invalid_email")?;
    }
    if !security::validate_password(&req.password) {
        err!(400, "invalid_password")?;
    }

    let rows_affected = sqlx::query(
        r#"
            INSERT INTO users (id, name, email, password, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(nanoid!())
    .bind(req.name.trim())
    .bind(&req.email)
    .bind(crypto::hash(&req.password))
    .bind(Role::Member)
    .execute(&db.pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        return Ok(HttpResponse::Conflict().body("email_taken"));
    }

    Ok(HttpResponse::Ok().body("success"))
}
