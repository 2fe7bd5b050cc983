//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod event_repo;
pub mod event_type_repo;
pub mod photo_repo;
pub mod session_repo;
pub mod user_repo;

pub use event_repo::EventRepo;
pub use event_type_repo::EventTypeRepo;
pub use photo_repo::PhotoRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
