//! Entity models and DTOs.
//!
//! Each model module holds the `FromRow` entity struct plus the
//! `Create*`/`Update*` DTOs consumed by its repository.

pub mod event;
pub mod event_type;
pub mod photo;
pub mod session;
pub mod user;
