use super::*;

#[test]
fn json_error_keys_are_read_in_order() {
    assert_eq!(
        error_message(r#"{"error":"Pokemon already in collection"}"#).as_deref(),
        Some("Pokemon already in collection")
    );
    assert_eq!(
        error_message(r#"{"message":"bad id","detail":"ignored"}"#).as_deref(),
        Some("bad id")
    );
}

#[test]
fn json_without_known_keys_gives_nothing() {
    assert_eq!(error_message(r#"{"status":409}"#), None);
}

#[test]
fn plain_text_is_truncated() {
    let long = "x".repeat(500);
    assert_eq!(error_message(&long).map(|m| m.len()), Some(200));
    assert_eq!(error_message("  gateway down \n").as_deref(), Some("gateway down"));
    assert_eq!(error_message("   "), None);
}
