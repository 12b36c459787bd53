//! Small shared helpers with no storefront logic of their own.

pub mod format;
pub mod storage;
