//! Repository interfaces (ports) consumed by the services.

pub mod token;
pub mod user;

pub use token::RefreshTokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use token::MockRefreshTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
