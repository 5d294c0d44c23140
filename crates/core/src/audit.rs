//! Audit event names.
//!
//! Every mutating admin action writes an audit row; the event type strings
//! live here so handlers and queries agree on them.

/// An admin created a shop item.
pub const EVENT_SHOP_ITEM_CREATED: &str = "shop_item_created";
