use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_program;
pub mod delete_program;
pub mod enroll;
pub mod list_programs;
pub mod update_program;

#[derive(Deserialize, IntoParams)]
pub struct ProgramIdParams {
    pub program_id: String,
}

pub type ProgramPath = Path<ProgramIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(create_program::create_program)
        .service(list_programs::list_programs)
        .service(update_program::update_program)
        .service(delete_program::delete_program)
        .service(enroll::enroll)
        .service(enroll::withdraw);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "programs")
    ),
    paths(
        create_program::create_program,
        list_programs::list_programs,
        update_program::update_program,
        delete_program::delete_program,
        enroll::enroll,
        enroll::withdraw
    ),
    components(schemas(
        crate::programs::program::Program,
        create_program::CreateProgramRequest,
        create_program::CreateProgramResponse,
        update_program::UpdateProgramRequest
    ))
)]
pub struct ProgramsApiDocs;
