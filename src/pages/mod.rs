//! Storefront screens. All CRUD glue: these consume the stores' outputs
//! and feed them events; the state machinery lives in `state/` and
//! `routing/`.

pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod category_selection;
pub mod checkout;
pub mod login;
pub mod product_detail;
pub mod register;
