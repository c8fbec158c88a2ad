//! tastetrail-auth
//!
//! Password hashing and bearer-token issuance/validation.

pub mod error;
pub mod jwt;
pub mod password;
