//! HTTP boundary of the SSO service
//!
//! Exposes registration, login and admin checks as JSON endpoints, and
//! holds the process wiring helpers used by the `sso` binary.

pub mod app;
pub mod cli;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::auth::AppState;
