use utoipa::OpenApi;

pub mod admin_summary;
pub mod member_summary;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(admin_summary::admin_summary)
        .service(member_summary::member_summary);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "dashboard")
    ),
    paths(admin_summary::admin_summary, member_summary::member_summary),
    components(schemas(
        admin_summary::AdminSummary,
        member_summary::MemberSummary
    ))
)]
pub struct DashboardApiDocs;
