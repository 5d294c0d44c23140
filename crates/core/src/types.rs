/// Entity tables with integer keys use PostgreSQL BIGSERIAL.
///
/// User and project identifiers are UUIDs and use `uuid::Uuid` directly.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
