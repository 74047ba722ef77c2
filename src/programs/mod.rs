pub mod program;
pub mod routes;
