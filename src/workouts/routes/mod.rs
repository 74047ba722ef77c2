use actix_web::web::Path;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

pub mod create_workout;
pub mod delete_workout;
pub mod list_workouts;
pub mod update_workout;

#[derive(Deserialize, IntoParams)]
pub struct WorkoutIdParams {
    pub workout_id: String,
}

pub type WorkoutPath = Path<WorkoutIdParams>;

pub fn configure_app(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(create_workout::create_workout)
        .service(list_workouts::list_workouts)
        .service(update_workout::update_workout)
        .service(delete_workout::delete_workout);
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "workouts")
    ),
    paths(
        create_workout::create_workout,
        list_workouts::list_workouts,
        update_workout::update_workout,
        delete_workout::delete_workout
    ),
    components(schemas(
        crate::workouts::workout::Workout,
        create_workout::CreateWorkoutRequest,
        create_workout::CreateWorkoutResponse,
        update_workout::UpdateWorkoutRequest
    ))
)]
pub struct WorkoutsApiDocs;
