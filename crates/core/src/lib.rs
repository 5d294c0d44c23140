//! Pure domain logic for the Shipwrecked platform.
//!
//! No I/O lives here: everything in this crate is a deterministic function of
//! its inputs so the DB and API layers can be tested against it without a
//! running database.

pub mod audit;
pub mod error;
pub mod progress;
pub mod project;
pub mod review;
pub mod roles;
pub mod shop;
pub mod types;
