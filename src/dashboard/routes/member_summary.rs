use actix_web::{get, web::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db::DB, error::HResult, metrics::metric::MetricEntry, payments::payment::Payment,
    session::IdentityEx,
};

#[derive(Serialize, ToSchema)]
pub struct MemberSummary {
    enrollment_count: i64,
    workout_count: i64,
    latest_metric: Option<MetricEntry>,
    last_payment: Option<Payment>,
}

/// Member Dashboard Summary
///
/// What the member landing page shows: enrollments, plan size, the newest
/// measurement and the most recent payment.
#[utoipa::path(
    responses((status = OK, description = "Success", body = MemberSummary)),
    tag = "dashboard",
    security(("session" = []))
)]
#[get("/dashboard/member")]
pub async fn member_summary(db: DB, identity: IdentityEx) -> HResult<Json<MemberSummary>> {
    let enrollment_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE user_id = $1")
            .bind(&identity.user_id)
            .fetch_one(&db.pool)
            .await?;

    let workout_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE user_id = $1")
        .bind(&identity.user_id)
        .fetch_one(&db.pool)
        .await?;

    let latest_metric = sqlx::query_as::<_, MetricEntry>(
        r#"
            SELECT id, user_id, weight_kg, height_cm, body_fat_pct, recorded_at
            FROM metrics
            WHERE user_id = $1
            ORDER BY recorded_at DESC
            LIMIT 1
        "#,
    )
    .bind(&identity.user_id)
    .fetch_optional(&db.pool)
    .await?;

    let last_payment = sqlx::query_as::<_, Payment>(
        r#"
            SELECT id, user_id, amount_cents, method, note, paid_at
            FROM payments
            WHERE user_id = $1
            ORDER BY paid_at DESC
            LIMIT 1
        "#,
    )
    .bind(&identity.user_id)
    .fetch_optional(&db.pool)
    .await?;

    Ok(Json(MemberSummary {
        enrollment_count,
        workout_count,
        latest_metric,
        last_payment,
    }))
}
