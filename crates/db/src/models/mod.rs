//! Entity structs and the DTOs that feed them.
//!
//! The pattern per submodule: a `FromRow` entity mirroring the table
//! row, a `Deserialize` DTO for creation, and an all-`Option` DTO for
//! partial updates.
//!
//! Serialized entities use camelCase field names to match the public API,
//! with two historical exceptions kept for client compatibility:
//! `projectID` and `in_review`.

pub mod audit;
pub mod hackatime_link;
pub mod project;
pub mod review;
pub mod session;
pub mod shop_item;
pub mod user;
