use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod change_password;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

#[derive(Deserialize, IntoParams)]
pub struct UserIdParams {
    pub user_id: String,
}

pub type UserPath = Path<UserIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_users::list_users)
        // /users/password has to land before /users/{user_id}
        .service(change_password::change_password)
        .service(get_user::get_user)
        .service(update_user::update_user)
        .service(delete_user::delete_user);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "users")
    ),
    paths(
        list_users::list_users,
        get_user::get_user,
        update_user::update_user,
        delete_user::delete_user,
        change_password::change_password
    ),
    components(schemas(
        crate::users::user::User,
        update_user::UpdateUserRequest,
        change_password::ChangePasswordRequest
    ))
)]
pub struct UsersApiDocs;
