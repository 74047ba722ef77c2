pub mod payment;
pub mod routes;
