use actix_web::{get, web::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db::DB,
    error::{macros::err, HResult},
    session::{IdentityEx, Role},
};

#[derive(Serialize, ToSchema)]
pub struct AdminSummary {
    member_count: i64,
    program_count: i64,
    payments_this_month_cents: i64,
    signups_this_week: i64,
}

/// Admin Dashboard Summary
///
/// The aggregate counters shown on the admin landing page. Admin only.
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = AdminSummary),
        (status = FORBIDDEN, description = "Access denied")
    ),
    tag = "dashboard",
    security(("session" = []))
)]
#[get("/dashboard/admin")]
pub async fn admin_summary(db: DB, identity: IdentityEx) -> HResult<Json<AdminSummary>> {
    if !identity.role.is_admin() {
        err!(403)?;
    }

    let member_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
        .bind(Role::Member)
        .fetch_one(&db.pool)
        .await?;

    let program_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM programs")
        .fetch_one(&db.pool)
        .await?;

    let payments_this_month_cents: i64 = sqlx::query_scalar(
        r#"
            SELECT COALESCE(SUM(amount_cents), 0)::BIGINT
            FROM payments
            WHERE paid_at >= date_trunc('month', now())
        "#,
    )
    .fetch_one(&db.pool)
    .await?;

    let signups_this_week: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users WHERE created_at >= now() - interval '7 days'",
    )
    .fetch_one(&db.pool)
    .await?;

    Ok(Json(AdminSummary {
        member_count,
        program_count,
        payments_this_month_cents,
        signups_this_week,
    }))
}
