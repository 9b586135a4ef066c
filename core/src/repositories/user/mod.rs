pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;

#[cfg(test)]
#[path = "tests/mock_tests.rs"]
mod mock_tests;
