//! Client-side stores.
//!
//! DESIGN
//! ======
//! Each store is an explicitly owned object (reactive signal + storage
//! handle) created once in `app.rs` and provided via context. Pure state
//! transitions live on the plain state structs so they are testable without
//! a browser; the store wrappers add reactivity and persistence.

pub mod cart;
pub mod session;
