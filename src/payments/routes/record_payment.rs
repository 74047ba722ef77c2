use actix_web::{post, web::Json};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::IdentityEx,
};

#[derive(Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    user_id: String,
    amount_cents: i64,
    #[schema(example = "card")]
    method: String,
    note: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RecordPaymentResponse {
    payment_id: String,
}

/// Record Payment
///
/// Records a membership payment against a member. Admin only.
#[utoipa::path(
    responses(
        (status = OK, description = "Recorded", body = RecordPaymentResponse),
        (status = BAD_REQUEST, description = "Invalid amount or method"),
        (status = FORBIDDEN, description = "Access denied"),
        (status = NOT_FOUND, description = "No such user")
    ),
    tag = "payments",
    security(("session" = []))
)]
#[post("/payments")]
pub async fn record_payment(
    db: DB,
    identity: IdentityEx,
    req: Json<RecordPaymentRequest>,
) -> HResult<Json<RecordPaymentResponse>> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    if req.amount_cents <= 0 {
        err!(400, "invalid_amount")?;
    }
    if req.method.trim().is_empty() {
        err!(400, "invalid_method")?;
    }

    if db.get_user_by_id(&req.user_id).await?.is_none() {
        err!(404, "no_such_user")?;
    }

    let payment_id = nanoid!();

    sqlx::query(
        "INSERT INTO payments (id, user_id, amount_cents, method, note) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&payment_id)
    .bind(&req.user_id)
    .bind(req.amount_cents)
    .bind(req.method.trim())
    .bind(req.note.as_deref().unwrap_or(""))
    .execute(&db.pool)
    .await?;

    Ok(Json(RecordPaymentResponse { payment_id }))
}
