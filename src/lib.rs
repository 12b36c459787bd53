//! Browser client for the university bookstore.
//!
//! The interesting machinery is client-side session and cart state:
//! `auth` decodes the credential token, `state` owns the stores backed
//! by browser storage, and `routing` decides who may see which screen.
//! Everything under `pages` and `components` is presentation over those
//! stores plus the REST glue in `net`.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;
