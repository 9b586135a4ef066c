//! Error response construction for the HTTP boundary

pub mod error;

pub use error::{
    auth_error_response, deadline_exceeded_response, json_error_handler,
    validation_error_response,
};
