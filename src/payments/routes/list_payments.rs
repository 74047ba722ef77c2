use actix_web::{
    get,
    web::{Json, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    payments::payment::Payment,
    session::IdentityEx,
};

#[derive(Deserialize, IntoParams)]
pub struct ListPaymentsQuery {
    /// Admins: a specific member's payments. Omitted, admins get everything
    /// and members get their own.
    pub user_id: Option<String>,
}

/// List Payments
///
/// Members see their own payment history. Admins see everyone's, or one
/// member's with `?user_id=`.
#[utoipa::path(
    params(ListPaymentsQuery),
    responses(
        (status = OK, description = "Success", body = Vec<Payment>),
        (status = FORBIDDEN, description = "Access denied")
    ),
    tag = "payments",
    security(("session" = []))
)]
#[get("/payments")]
pub async fn list_payments(
    db: DB,
    identity: IdentityEx,
    query: Query<ListPaymentsQuery>,
) -> HResult<Json<Vec<Payment>>> {
    let payments = if identity.role.is_admin() {
        match query.user_id {
            Some(ref user_id) => {
                sqlx::query_as::<_, Payment>(
                    "SELECT id, user_id, amount_cents, method, note, paid_at FROM payments WHERE user_id = $1 ORDER BY paid_at DESC",
                )
                .bind(user_id)
                .fetch_all(&db.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Payment>(
                    "SELECT id, user_id, amount_cents, method, note, paid_at FROM payments ORDER BY paid_at DESC",
                )
                .fetch_all(&db.pool)
                .await?
            }
        }
    } else {
        if let Some(ref other) = query.user_id {
            if other != &identity.user_id {
                err!(403)?;
            }
        }

        sqlx::query_as::<_, Payment>(
            "SELECT id, user_id, amount_cents, method, note, paid_at FROM payments WHERE user_id = $1 ORDER BY paid_at DESC",
        )
        .bind(&identity.user_id)
        .fetch_all(&db.pool)
        .await?
    };

    Ok(Json(payments))
}
