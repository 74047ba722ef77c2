use actix_web::{patch, web::Json, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    programs::routes::ProgramPath,
    session::IdentityEx,
};

#[derive(Deserialize, ToSchema)]
pub struct UpdateProgramRequest {
    name: Option<String>,
    description: Option<String>,
    duration_weeks: Option<i32>,
}

/// Update Program
///
/// Edits a training program's fields. Admin only.
#[utoipa::path(
    params(super::ProgramIdParams),
    responses(
        (status = OK, description = "Updated"),
        (status = BAD_REQUEST, description = "Invalid field"),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such program")
    ),
    tag = "programs",
    security(("session" = []))
)]
#[patch("/programs/{program_id}")]
pub async fn update_program(
    db: DB,
    identity: IdentityEx,
    path: ProgramPath,
    req: Json<UpdateProgramRequest>,
) -> HResult<HttpResponse> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            err!(400, "invalid_name")?;
        }
    }
    if let Some(weeks) = req.duration_weeks {
        if !(1..=104).contains(&weeks) {
            err!(400, "invalid_duration")?;
        }
    }

    let rows_affected = sqlx::query(
        r#"
            UPDATE programs
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                duration_weeks = COALESCE($3, duration_weeks)
            WHERE id = $4
        "#,
    )
    .bind(req.name.as_deref().map(str::trim))
    .bind(req.description.as_deref())
    .bind(req.duration_weeks)
    .bind(&path.program_id)
    .execute(&db.pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_program")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
