//! HTTP API for the Lifeline timeline platform.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod storage;
