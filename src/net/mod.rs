//! HTTP surface towards the storefront API.
//!
//! Everything in here is thin request/response glue: the API server owns
//! catalog data, orders, users, and statistics. The client only consumes.

pub mod api;
pub mod types;
