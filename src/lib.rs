// Library exports for Kwento
// This allows integration tests and external code to use Kwento modules

pub mod blog;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod share;
