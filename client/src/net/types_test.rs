use super::*;

fn jane() -> UserJwtData {
    UserJwtData { id: 7, name: "Jane Doe".to_owned(), username: "jane".to_owned(), email: "jane@example.com".to_owned() }
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn error_response_deserializes() {
    let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"invalid credentials"}"#).unwrap();
    assert_eq!(parsed.error, "invalid credentials");
}

#[test]
fn error_response_rejects_missing_field() {
    assert!(serde_json::from_str::<ErrorResponse>(r#"{"message":"x"}"#).is_err());
}

#[test]
fn user_me_data_is_flat_on_the_wire() {
    let me = UserMeData { user: jane(), created_at: 1_700_000_000, updated_at: 1_700_000_500 };
    let value = serde_json::to_value(&me).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 7,
            "name": "Jane Doe",
            "username": "jane",
            "email": "jane@example.com",
            "created_at": 1_700_000_000,
            "updated_at": 1_700_000_500
        })
    );
    assert_eq!(serde_json::from_value::<UserMeData>(value).unwrap(), me);
}

#[test]
fn user_jwt_data_requires_email() {
    let raw = r#"{"id":1,"name":"A","username":"abcd"}"#;
    assert!(serde_json::from_str::<UserJwtData>(raw).is_err());
}

#[test]
fn refresh_token_data_deserializes() {
    let raw = r#"{"id":"rt-1","jwt_id":"jti-9","user_id":7,"is_active":true,
                  "expires_at":1700086400,"created_at":1700000000,"updated_at":1700000000}"#;
    let parsed: RefreshTokenData = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.jwt_id, "jti-9");
    assert_eq!(parsed.user_id, 7);
    assert!(parsed.is_active);
    assert_eq!(parsed.expires_at, 1_700_086_400);
}

#[test]
fn logout_response_defaults_to_not_redirected() {
    assert!(!LogoutResponse::default().redirected);
}

// =============================================================
// decode_reply
// =============================================================

#[test]
fn decode_reply_success_payload() {
    let reply: SuccessfulResponse = decode_reply(true, r#"{"message":"logged out"}"#).unwrap();
    assert_eq!(reply.message, "logged out");
}

#[test]
fn decode_reply_error_body_becomes_rejected() {
    let result = decode_reply::<SuccessfulResponse>(false, r#"{"error":"no session"}"#);
    assert_eq!(result, Err(ServiceError::Rejected("no session".to_owned())));
}

#[test]
fn decode_reply_malformed_bodies() {
    assert!(matches!(decode_reply::<SuccessfulResponse>(true, "<html>"), Err(ServiceError::Malformed(_))));
    assert!(matches!(decode_reply::<SuccessfulResponse>(false, ""), Err(ServiceError::Malformed(_))));
}

#[test]
fn decode_reply_user_profile() {
    let body = r#"{"id":7,"name":"Jane Doe","username":"jane","email":"jane@example.com","created_at":1,"updated_at":2}"#;
    let me: UserMeData = decode_reply(true, body).unwrap();
    assert_eq!(me.user, jane());
    assert_eq!((me.created_at, me.updated_at), (1, 2));
}
