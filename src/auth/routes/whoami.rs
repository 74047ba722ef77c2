use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::{
    db::DB,
    error::{HResult, IntoHandlerErrorResult},
    session::IdentityEx,
    users::user::User,
};

/// Who Am I
///
/// Returns the account behind the current session cookies. A session whose
/// subject no longer exists in the database is treated as unauthenticated.
#[utoipa::path(
    responses(
        (status = OK, description = "Success", body = User),
        (status = UNAUTHORIZED, description = "No valid session")
    ),
    tag = "auth",
    security(("session" = []))
)]
#[get("/auth/whoami")]
pub async fn whoami(db: DB, identity: IdentityEx) -> HResult<HttpResponse> {
    let user = db.get_user_by_id(&identity.user_id).await?.or_err(401)?;

    Ok(HttpResponse::Ok().json(json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "created_at": user.created_at,
    })))
}
