pub mod routes;
pub mod workout;
