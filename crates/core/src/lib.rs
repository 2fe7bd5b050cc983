//! Domain logic for the Lifeline timeline platform.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API, and any future CLI tooling. It holds the
//! shared id/timestamp types, the error taxonomy, the pure timeline
//! layout pass, and small validation/signing helpers.

pub mod color;
pub mod error;
pub mod media;
pub mod signing;
pub mod timeline;
pub mod types;
