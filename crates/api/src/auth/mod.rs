//! Authentication building blocks: JWTs, password hashing, cookies.

pub mod cookies;
pub mod jwt;
pub mod password;
