pub mod metric;
pub mod routes;
