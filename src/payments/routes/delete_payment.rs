use actix_web::{delete, HttpResponse};

use crate::{
    db::DB,
    error::{macros::err, HResult},
    payments::routes::PaymentPath,
    session::IdentityEx,
};

/// Delete Payment
///
/// Removes a mis-recorded payment. Admin only.
#[utoipa::path(
    params(super::PaymentIdParams),
    responses(
        (status = OK, description = "Deleted"),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such payment")
    ),
    tag = "payments",
    security(("session" = []))
)]
#[delete("/payments/{payment_id}")]
pub async fn delete_payment(
    db: DB,
    identity: IdentityEx,
    path: PaymentPath,
) -> HResult<HttpResponse> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    let rows_affected = sqlx::query("DELETE FROM payments WHERE id = $1")
        .bind(&path.payment_id)
        .execute(&db.pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        err!(404, "no_such_payment")?;
    }

    Ok(HttpResponse::Ok().body("success"))
}
