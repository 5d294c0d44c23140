//! HTTP request handlers, one module per resource.

pub mod project;
pub mod review_request;
pub mod shells;
pub mod shop_items;
