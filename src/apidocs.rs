use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    OpenApi,
};

use crate::{
    auth::routes::AuthApiDocs, dashboard::routes::DashboardApiDocs, metrics::routes::MetricsApiDocs,
    payments::routes::PaymentsApiDocs, programs::routes::ProgramsApiDocs,
    session::cookies::AUTH_COOKIE, users::routes::UsersApiDocs, workouts::routes::WorkoutsApiDocs,
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionSecurityAddon)
)]
pub struct ApiDocs;

pub fn setup_oapi() -> utoipa::openapi::OpenApi {
    let mut oapi = ApiDocs::openapi();

    oapi.merge(AuthApiDocs::openapi());
    oapi.merge(UsersApiDocs::openapi());
    oapi.merge(ProgramsApiDocs::openapi());
    oapi.merge(WorkoutsApiDocs::openapi());
    oapi.merge(MetricsApiDocs::openapi());
    oapi.merge(PaymentsApiDocs::openapi());
    oapi.merge(DashboardApiDocs::openapi());

    oapi
}

struct SessionSecurityAddon;

impl utoipa::Modify for SessionSecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.components = Some(
            utoipa::openapi::ComponentsBuilder::new()
                .security_scheme(
                    "session",
                    SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE))),
                )
                .build(),
        )
    }
}
