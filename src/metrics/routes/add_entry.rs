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
pub struct AddEntryRequest {
    weight_kg: f32,
    height_cm: f32,
    body_fat_pct: Option<f32>,
}

#[derive(Serialize, ToSchema)]
pub struct AddEntryResponse {
    entry_id: String,
}

/// Add Metric Entry
///
/// Logs a body-metrics measurement for the calling user.
#[utoipa::path(
    responses(
        (status = OK, description = "Logged", body = AddEntryResponse),
        (status = BAD_REQUEST, description = "Out-of-range measurement")
    ),
    tag = "metrics",
    security(("session" = []))
)]
#[post("/metrics")]
pub async fn add_entry(
    db: DB,
    identity: IdentityEx,
    req: Json<AddEntryRequest>,
) -> HResult<Json<AddEntryResponse>> {
    if !(20.0..=400.0).contains(&req.weight_kg) {
        err!(400, "invalid_weight")?;
    }
    if !(50.0..=260.0).contains(&req.height_cm) {
        err!(400, "invalid_height")?;
    }
    if let Some(pct) = req.body_fat_pct {
        if !(1.0..=75.0).contains(&pct) {
            err!(400, "invalid_body_fat")?;
        }
    }

    let entry_id = nanoid!();

    sqlx::query(
        "INSERT INTO metrics (id, user_id, weight_kg, height_cm, body_fat_pct) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&entry_id)
    .bind(&identity.user_id)
    .bind(req.weight_kg)
    .bind(req.height_cm)
    .bind(req.body_fat_pct)
    .execute(&db.pool)
    .await?;

    Ok(Json(AddEntryResponse { entry_id }))
}
