//! Repository interfaces consumed by the authentication service, with
//! in-memory implementations for tests and local development.

pub mod app;
pub mod user;

pub use app::{AppRepository, MockAppRepository};
pub use user::{MockUserRepository, UserRepository};
