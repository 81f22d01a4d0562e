use super::*;

#[test]
fn statuses_map_to_variants() {
    let nf = RemoteError::from_status("get card", StatusCode::NOT_FOUND, String::new());
    assert!(nf.is_not_found());
    assert_eq!(nf.kind(), ErrorKind::NotFound);

    let conflict = RemoteError::from_status("add", StatusCode::CONFLICT, "owned".to_string());
    assert!(conflict.is_conflict());
    assert_eq!(conflict.kind(), ErrorKind::Conflict);

    let unauth = RemoteError::from_status("me", StatusCode::UNAUTHORIZED, String::new());
    assert_eq!(unauth.kind(), ErrorKind::Unauthorized);

    let forbidden = RemoteError::from_status("admin", StatusCode::FORBIDDEN, String::new());
    assert_eq!(forbidden.kind(), ErrorKind::Rejected);
}

#[test]
fn other_statuses_keep_code_and_message() {
    let err = RemoteError::from_status(
        "load range",
        StatusCode::BAD_REQUEST,
        "from must be positive".to_string(),
    );
    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(
        err.to_string(),
        "load range: server returned 400: from must be positive"
    );
}

#[test]
fn bad_base_url_counts_as_network() {
    let err = RemoteError::InvalidBaseUrl("ftp://x".to_string());
    assert_eq!(err.kind(), ErrorKind::Network);
}
