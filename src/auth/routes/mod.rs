use utoipa::OpenApi;

pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;
pub mod whoami;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(login::login)
        .service(logout::logout)
        .service(register::register)
        .service(whoami::whoami)
        .service(forgot_password::forgot_password)
        .service(reset_password::reset_password);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "auth")
    ),
    paths(
        login::login,
        logout::logout,
        register::register,
        whoami::whoami,
        forgot_password::forgot_password,
        reset_password::reset_password
    ),
    components(schemas(
        login::LoginRequest,
        register::RegisterRequest,
        forgot_password::ForgotPasswordRequest,
        reset_password::ResetPasswordRequest
    ))
)]
pub struct AuthApiDocs;
