//! Domain entities representing core business objects.

pub mod app;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use app::App;
pub use token::{Claims, DEFAULT_TOKEN_TTL_SECONDS};
pub use user::User;
