pub mod auth;
pub mod event;
pub mod event_type;
pub mod health;
pub mod photo;
pub mod timeline;
