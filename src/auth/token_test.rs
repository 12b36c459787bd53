use base64::Engine;

use super::*;

fn make_token(payload: &serde_json::Value) -> String {
    let body = ENGINE.encode(serde_json::to_vec(payload).unwrap());
    format!("header.{body}.signature")
}

fn user_token(is_admin: serde_json::Value) -> String {
    make_token(&serde_json::json!({
        "user": {
            "id": "u1",
            "nombre": "Ana",
            "email": "ana@uni.edu",
            "isAdmin": is_admin,
        },
        "iat": 1_700_000_000,
    }))
}

// =============================================================
// Successful decoding
// =============================================================

#[test]
fn decodes_user_profile() {
    let payload = decode(&user_token(serde_json::json!(false))).unwrap();
    assert_eq!(payload.user.id, "u1");
    assert_eq!(payload.user.nombre, "Ana");
    assert_eq!(payload.user.email, "ana@uni.edu");
    assert!(!payload.user.is_admin);
}

#[test]
fn decode_is_idempotent() {
    let token = user_token(serde_json::json!(true));
    assert_eq!(decode(&token).unwrap(), decode(&token).unwrap());
}

#[test]
fn numeric_id_is_normalized_to_string() {
    let token = make_token(&serde_json::json!({
        "user": { "id": 42, "nombre": "Ana", "email": "a@b.c", "isAdmin": false }
    }));
    assert_eq!(decode(&token).unwrap().user.id, "42");
}

#[test]
fn missing_profile_fields_default_to_empty() {
    let token = make_token(&serde_json::json!({ "user": {} }));
    let payload = decode(&token).unwrap();
    assert_eq!(payload.user.id, "");
    assert_eq!(payload.user.nombre, "");
    assert!(!payload.user.is_admin);
}

// =============================================================
// Admin flag coercion (JS truthiness)
// =============================================================

#[test]
fn admin_flag_bool() {
    assert!(decode(&user_token(serde_json::json!(true))).unwrap().user.is_admin);
    assert!(!decode(&user_token(serde_json::json!(false))).unwrap().user.is_admin);
}

#[test]
fn admin_flag_nonzero_number_is_true() {
    assert!(decode(&user_token(serde_json::json!(1))).unwrap().user.is_admin);
    assert!(!decode(&user_token(serde_json::json!(0))).unwrap().user.is_admin);
}

#[test]
fn admin_flag_nonempty_string_is_true() {
    assert!(decode(&user_token(serde_json::json!("true"))).unwrap().user.is_admin);
    // Any non-empty string is truthy, even "false".
    assert!(decode(&user_token(serde_json::json!("false"))).unwrap().user.is_admin);
    assert!(!decode(&user_token(serde_json::json!(""))).unwrap().user.is_admin);
}

#[test]
fn admin_flag_null_or_absent_is_false() {
    assert!(!decode(&user_token(serde_json::json!(null))).unwrap().user.is_admin);
    let token = make_token(&serde_json::json!({
        "user": { "id": "u1", "nombre": "Ana", "email": "a@b.c" }
    }));
    assert!(!decode(&token).unwrap().user.is_admin);
}

// =============================================================
// Failure conditions
// =============================================================

#[test]
fn rejects_wrong_segment_count() {
    assert_eq!(decode("only-one-segment"), Err(DecodeError::MalformedSegments));
    assert_eq!(decode("two.segments"), Err(DecodeError::MalformedSegments));
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::MalformedSegments));
    assert_eq!(decode(""), Err(DecodeError::MalformedSegments));
}

#[test]
fn rejects_invalid_base64() {
    assert_eq!(decode("h.!!not-base64!!.s"), Err(DecodeError::InvalidEncoding));
}

#[test]
fn rejects_invalid_json() {
    let body = ENGINE.encode(b"not json at all");
    let token = format!("h.{body}.s");
    assert_eq!(decode(&token), Err(DecodeError::InvalidJson));
}

#[test]
fn rejects_payload_without_user() {
    let token = make_token(&serde_json::json!({ "sub": "u1" }));
    assert_eq!(decode(&token), Err(DecodeError::MissingUser));
    let token = make_token(&serde_json::json!({ "user": "not-an-object" }));
    assert_eq!(decode(&token), Err(DecodeError::MissingUser));
}
