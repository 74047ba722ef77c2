use actix_web::{patch, web::Json, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    security,
    session::{IdentityEx, Role},
    users::routes::UserPath,
};

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    /// Only admins may change a role.
    role: Option<Role>,
}

/// Update User
///
/// Profile editing. Members may edit their own name and email; admins may
/// edit anyone and additionally change the account role.
#[utoipa::path(
    params(super::UserIdParams),
    responses(
        (status = OK, description = "Updated"),
        (status = BAD_REQUEST, description = "Invalid field"),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such user"),
        (status = CONFLICT, description = "Email already in use")
    ),
    tag = "users",
    security(("session" = []))
)]
#[patch("/users/{user_id}")]
pub async fn update_user(
    db: DB,
    identity: IdentityEx,
    path: UserPath,
    req: Json<UpdateUserRequest>,
) -> HResult<HttpResponse> {
    if !identity.role.is_admin() && identity.user_id != path.user_id {
        err!(403)?;
    }
    if req.role.is_some() && !identity.role.is_admin() {
        err!(403, "only_admins_change_roles")?;
    }

    if let Some(ref name) = req.name {
        if !security::validate_display_name(name) {
            err!(400, "invalid_name")?;
        }
    }
    if let Some(ref email) = req.email {
        if !security::validate_email(email) {
            err!(400, "invalid_email")?;
        }
        let in_use: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 AND id <> $2)",
        )
        .bind(email)
        .bind(&path.user_id)
        .fetch_one(&db.pool)
        .await?;

        if in_use {
            return Ok(HttpResponse::Conflict().body("email_taken"));
        }
    }

    let rows_affected = sqlx::query(
        r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                role = COALESCE($3, role)
            WHERE id = $4
        "#,
    )
    .bind(req.name.as_deref().map(str::trim))
    .bind(req.email.as_deref())
    .bind(req.role)
    .bind(&path.user_id)
    .execute(&db.pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_user")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
