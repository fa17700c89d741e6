use super::*;

#[test]
fn status_401_and_403_classify_as_auth() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Auth { status: 401 });
    assert_eq!(ApiError::from_status(403, None), ApiError::Auth { status: 403 });
}

#[test]
fn other_statuses_classify_as_server() {
    assert_eq!(
        ApiError::from_status(500, Some("boom".to_owned())),
        ApiError::Server {
            status: 500,
            message: Some("boom".to_owned()),
        }
    );
    assert!(matches!(
        ApiError::from_status(404, None),
        ApiError::Server { status: 404, .. }
    ));
}

#[test]
fn body_message_prefers_message_then_error() {
    let body = serde_json::json!({"message": "m1", "error": "m2"});
    assert_eq!(body_message(&body), Some("m1".to_owned()));

    let body = serde_json::json!({"error": "m2"});
    assert_eq!(body_message(&body), Some("m2".to_owned()));

    let body = serde_json::json!({"message": "", "other": true});
    assert_eq!(body_message(&body), None);
}

#[test]
fn user_message_uses_server_text_when_present() {
    let err = ApiError::Server {
        status: 422,
        message: Some("email already taken".to_owned()),
    };
    assert_eq!(err.user_message(), "email already taken");

    let err = ApiError::Server {
        status: 500,
        message: None,
    };
    assert_eq!(err.user_message(), "Request failed with status 500");
}

#[test]
fn validation_message_passes_through() {
    let err = ApiError::Validation("File size must be less than 1MB".to_owned());
    assert_eq!(err.user_message(), "File size must be less than 1MB");
}
