//! Navigation policy: route constants and the access guard.

pub mod guard;
pub mod paths;
