//! Credential hashing service.

pub mod service;

pub use service::PasswordHasher;
