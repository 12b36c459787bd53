//! Credential token decoding.
//!
//! The token is an opaque signed string of three dot-separated segments; the
//! middle segment is base64url JSON carrying the user profile. Decoding here
//! is **not** verification: the server issued the token and remains the
//! authority for data access. The decoded profile only drives display and
//! routing.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use serde_json::Value;
use thiserror::Error;

const ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Profile carried in the token's payload segment.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub is_admin: bool,
}

/// Successfully decoded token payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPayload {
    pub user: SessionUser,
}

/// Why a token failed to decode. Callers treat every variant identically:
/// the token yields no usable profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token does not have three segments")]
    MalformedSegments,
    #[error("payload segment is not valid base64")]
    InvalidEncoding,
    #[error("payload segment is not valid JSON")]
    InvalidJson,
    #[error("payload has no user object")]
    MissingUser,
}

/// Decode the payload segment of a credential token.
///
/// Pure and infallible in the panicking sense: every malformed input maps
/// to a [`DecodeError`].
pub fn decode(token: &str) -> Result<TokenPayload, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::MalformedSegments);
    }

    let bytes = ENGINE
        .decode(segments[1])
        .map_err(|_| DecodeError::InvalidEncoding)?;
    let payload: Value = serde_json::from_slice(&bytes).map_err(|_| DecodeError::InvalidJson)?;
    let user = payload
        .get("user")
        .and_then(Value::as_object)
        .ok_or(DecodeError::MissingUser)?;

    Ok(TokenPayload {
        user: SessionUser {
            id: field_string(user.get("id")),
            nombre: field_string(user.get("nombre")),
            email: field_string(user.get("email")),
            is_admin: truthy(user.get("isAdmin")),
        },
    })
}

/// Profile fields arrive as strings but ids are sometimes numeric.
fn field_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// JavaScript-style truthiness for the admin flag, which issuers have
/// encoded as a bool, a string, or a number.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
