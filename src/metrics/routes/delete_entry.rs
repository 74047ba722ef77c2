use actix_web::{delete, HttpResponse};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    metrics::routes::EntryPath,
    session::IdentityEx,
};

/// Delete Metric Entry
///
/// Removes one of the calling user's measurements.
#[utoipa::path(
    params(super::EntryIdParams),
    responses(
        (status = OK, description = "Deleted"),
        (status = NOT_FOUND, description = "No such entry")
    ),
    tag = "metrics",
    security(("session" = []))
)]
#[delete("/metrics/{entry_id}")]
pub async fn delete_entry(db: DB, identity: IdentityEx, path: EntryPath) -> HResult<HttpResponse> {
    let rows_affected = sqlx::query("DELETE FROM metrics WHERE id = $1 AND user_id = $2")
        .bind(&path.entry_id)
        .bind(&identity.user_id)
        .execute(&db.pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_entry")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
