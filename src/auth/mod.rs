//! Credential handling: local decoding of the server-issued token.

pub mod token;
