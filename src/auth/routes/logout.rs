use actix_web::{get, HttpResponse};

use crate::{error::HResult, session::cookies};

/// Logout
///
/// Clears both session cookies. Works even with a half-broken cookie pair,
/// so no identity is required.
#[utoipa::path(
    responses((status = OK, description = "Session cookies cleared")),
    tag = "auth"
)]
#[get("/auth/logout")]
pub async fn logout() -> HResult<HttpResponse> {
    let [auth_cookie, role_cookie] = cookies::clear();

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie)
        .cookie(role_cookie)
        .body("success"))
}
