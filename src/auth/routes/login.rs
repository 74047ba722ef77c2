use actix_web::{post, web::Json, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    crypto,
    db::DB,
    error::HResult,
    session::{cookies, Identity, Role},
    users::user::User,
};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "member@example.com")]
    email: String,
    password: String,
}

#[derive(sqlx::FromRow)]
struct LoginRow {
    id: String,
    name: String,
    email: String,
    role: Role,
    password: String,
    created_at: DateTime<Utc>,
}

/// Login
///
/// Verifies the credentials and, on success, issues the two session cookies
/// (`auth` and `role`) that identify the user on subsequent requests.
#[utoipa::path(
    responses(
        (status = OK, description = "Logged in, session cookies set", body = User),
        (status = UNAUTHORIZED, description = "Bad email or password")
    ),
    tag = "auth"
)]
#[post("/auth/login")]
pub async fn login(db: DB, req: Json<LoginRequest>) -> HResult<HttpResponse> {
    let row = sqlx::query_as::<_, LoginRow>(
        "SELECT id, name, email, role, password, created_at FROM users WHERE email = $1",
    )
    .bind(&req.email)
    .fetch_optional(&db.pool)
    .await?;

    let row = match row {
        Some(row) if crypto::verify(&req.password, &row.password) => row,
        _ => return Ok(HttpResponse::Unauthorized().body("access_denied")),
    };

    let identity = Identity {
        user_id: row.id.clone(),
        role: row.role,
    };
    let [auth_cookie, role_cookie] = cookies::issue(&identity);

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie)
        .cookie(role_cookie)
        .json(User {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
        }))
}
