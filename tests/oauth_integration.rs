mod common;

use common::build_state;
use ideahub_client::error::ClientError;
use ideahub_client::models::Token;
use ideahub_client::oauth::{resolve_callback, CallbackParams};
use mockito::Server;

const ME_BODY: &str = r#"{"ok":true,"user":{
    "_id":"u1","username":"ada","email":"ada@example.com","role":"user"}}"#;

/// A callback carrying a token behaves exactly like a normal login, and the
/// caller is sent to the sanitized next target.
#[tokio::test]
async fn callback_with_token_logs_in_and_returns_next() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/auth/me")
        .match_header("authorization", "Bearer cb-token")
        .with_status(200)
        .with_body(ME_BODY)
        .create_async()
        .await;

    let state = build_state(&server.url());
    let params = CallbackParams::from_query("token=cb-token&next=%2Fideas%2F42");

    let next = resolve_callback(&state.session, &params).await.unwrap();

    assert_eq!(next, "/ideas/42");
    assert_eq!(
        state.store.get().await.unwrap(),
        Some(Token::new("cb-token"))
    );
    assert!(state.session.current_user().await.is_some());
}

/// A provider error fails the callback and leaves any previously stored
/// token untouched.
#[tokio::test]
async fn callback_error_preserves_existing_token() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/auth/me")
        .expect(0)
        .create_async()
        .await;

    let state = build_state(&server.url());
    state.store.set(&Token::new("existing")).await.unwrap();

    let params = CallbackParams::from_query("error=access_denied");
    let err = resolve_callback(&state.session, &params).await.unwrap_err();

    assert!(err.humanize().contains("access_denied"));
    assert_eq!(
        state.store.get().await.unwrap(),
        Some(Token::new("existing"))
    );
    m.assert_async().await;
}

/// An error with a message gets both in the surfaced text.
#[tokio::test]
async fn callback_error_message_is_combined() {
    let server = Server::new_async().await;
    let state = build_state(&server.url());

    let params = CallbackParams::from_query("error=access_denied&message=user%20said%20no");
    let err = resolve_callback(&state.session, &params).await.unwrap_err();

    assert_eq!(err.humanize(), "access_denied: user said no");
}

/// A callback with neither token nor error is malformed.
#[tokio::test]
async fn callback_without_token_or_error_is_missing_token() {
    let server = Server::new_async().await;
    let state = build_state(&server.url());

    let params = CallbackParams::from_query("next=%2F");
    let err = resolve_callback(&state.session, &params).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingToken));
    assert_eq!(err.humanize(), "Missing token in callback URL.");
    assert_eq!(state.store.get().await.unwrap(), None);
}

/// Hostile next values coming back on the callback collapse to "/".
#[tokio::test]
async fn callback_next_is_sanitized() {
    for hostile in ["//evil.com", "https://evil.com", "/login?x=1"] {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/auth/me")
            .with_status(200)
            .with_body(ME_BODY)
            .create_async()
            .await;

        let state = build_state(&server.url());
        let params = CallbackParams {
            token: Some(Token::new("t")),
            next: Some(hostile.to_string()),
            ..Default::default()
        };

        let next = resolve_callback(&state.session, &params).await.unwrap();
        assert_eq!(next, "/", "next {hostile:?} should be rejected");
    }
}

/// A token that fails resolution propagates the error; the guard then sees
/// an anonymous session, not a half-authenticated one.
#[tokio::test]
async fn callback_token_rejected_by_platform() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/auth/me")
        .with_status(401)
        .with_body(r#"{"message":"nope","code":"UNAUTHORIZED"}"#)
        .create_async()
        .await;

    let state = build_state(&server.url());
    let params = CallbackParams::from_query("token=doomed");

    let err = resolve_callback(&state.session, &params).await.unwrap_err();
    assert_eq!(err.humanize(), "Please login first.");
    assert!(state.session.current_user().await.is_none());
}
