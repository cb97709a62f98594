//! # GateKey Infrastructure
//!
//! Concrete implementations of the core repository interfaces:
//! MySQL-backed persistence for users and refresh tokens via SQLx.
//! Pool construction and tuning belong to the surrounding application.

pub mod database;

pub use database::mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};
