//! Authentication and authorization
//!
//! `jwt` issues and verifies tokens, `password` wraps argon2 hashing, and
//! `middleware` holds the request gates.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtError, JwtService};
