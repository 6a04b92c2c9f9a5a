//! Authentication helpers: JWT access-token generation and validation.
//!
//! User management and login live in the host platform; this module only
//! understands the tokens it issues.

pub mod jwt;
