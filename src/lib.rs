// Re-export internals for use under the gym_server crate namespace
// Mainly for use in tests
pub mod apidocs;
pub mod auth;
pub mod crypto;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod gate;
pub mod metrics;
pub mod options;
pub mod payments;
pub mod programs;
pub mod security;
pub mod session;
pub mod users;
pub mod workouts;
