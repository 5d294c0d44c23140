//! Shipwrecked API server library.
//!
//! Everything except `main` lives here, public, so the integration
//! tests can assemble the same app the binary runs.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
