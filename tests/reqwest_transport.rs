//! End-to-end checks of the default reqwest transport against a stub Bot API.

use std::time::Duration;

use serde_json::json;
use tg::{
    DeleteMessage, ParseMode, ReqwestTransport, SendMessage, SendOptions, TgClient, TgError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const TOKEN: &str = "123456:test-token";

fn client_for(server: &MockServer) -> TgClient {
    TgClient::builder(TOKEN)
        .api_server(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_message_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "chat_id": 42,
            "text": "hello",
            "parse_mode": "HTML",
            "disable_web_page_preview": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "message_id": 10, "date": 1700000000, "chat": { "id": 42 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = SendOptions {
        parse_mode: ParseMode::HTML,
        disable_web_page_preview: true,
        ..Default::default()
    };
    let request = SendMessage::new(42, "hello", options).unwrap();
    let message = client_for(&server).send_message(request).await.unwrap();
    assert_eq!(message.message_id, 10);
    assert_eq!(message.date, 1_700_000_000);
}

#[tokio::test]
async fn get_me_through_injected_reqwest_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "id": 123456, "is_bot": true, "first_name": "Notifier", "username": "notifier_bot" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TgClient::builder(TOKEN)
        .api_server(server.uri())
        .transport(ReqwestTransport::new(reqwest::Client::new()))
        .build()
        .unwrap();
    let me = client.get_me().await.unwrap();
    assert_eq!(me.id, 123456);
    assert!(me.is_bot);
    assert_eq!(me.first_name, "Notifier");
    assert_eq!(me.username.as_deref(), Some("notifier_bot"));
}

#[tokio::test]
async fn bad_request_envelope_is_reported_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/deleteMessage")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: message to delete not found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_message(DeleteMessage::new(42, 999).unwrap())
        .await
        .unwrap_err();
    match &err {
        TgError::Api { method, source } => {
            assert_eq!(*method, "deleteMessage");
            assert_eq!(source.code(), Some(400));
            assert_eq!(
                source.to_string(),
                "Bad Request: message to delete not found"
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_does_not_leak_token() {
    // Nothing listens on a port released right after binding it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TgClient::builder(TOKEN)
        .api_server(format!("http://{addr}"))
        .build()
        .unwrap();
    let err = client.get_me().await.unwrap_err();
    assert!(matches!(err, TgError::Transport { method: "getMe", .. }), "{err:?}");
    assert!(!err.to_string().contains(TOKEN), "{err}");
    assert!(!format!("{err:?}").contains(TOKEN), "{err:?}");
}
