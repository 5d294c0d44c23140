//! Session-token helpers for the bearer-token auth scheme.

pub mod token;
