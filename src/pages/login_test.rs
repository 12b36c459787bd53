use super::looks_like_email;

#[test]
fn accepts_plain_addresses() {
    assert!(looks_like_email("ana@uni.edu"));
    assert!(looks_like_email("a.b@c.d.e"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!looks_like_email(""));
    assert!(!looks_like_email("ana"));
    assert!(!looks_like_email("ana@uni"));
    assert!(!looks_like_email("ana@ uni.edu"));
    assert!(!looks_like_email("@uni.edu"));
}
