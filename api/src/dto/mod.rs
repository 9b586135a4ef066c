//! Request and response bodies

pub mod auth;

pub use auth::{
    IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};
