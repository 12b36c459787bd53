//! Reusable UI components.

pub mod auth_status;
pub mod navbar;
pub mod product_card;
pub mod require_auth;
