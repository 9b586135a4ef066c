//! SQLite repository implementations

mod app_repository_impl;
mod user_repository_impl;

pub use app_repository_impl::SqliteAppRepository;
pub use user_repository_impl::SqliteUserRepository;
