//! Integration tests for the Telegram layer against a mockito Bot API server.
//!
//! Teloxide request path format is `/bot<token>/<method>`; method names are matched case-insensitively.

use command_router::CommandRouter;
use mockito::{Matcher, Server, ServerGuard};
use repochart_core::{Bot as CoreBot, Chat, CoreError, Photo};
use repochart_telegram::{announce, TelegramBotAdapter, TelegramConfig};
use std::sync::Arc;

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

const SENT_MESSAGE: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 1,
        "date": 1706529600,
        "chat": {"id": 123, "type": "private", "first_name": "Ana"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "RepoChart", "username": "repochartbot"},
        "text": "ok"
    }
}"#;

fn method_path(method: &str) -> Matcher {
    Matcher::Regex(format!("(?i)^/bot{}/{}$", TEST_BOT_TOKEN, method))
}

fn telegram_bot(server: &ServerGuard) -> teloxide::Bot {
    TelegramConfig::with_token(TEST_BOT_TOKEN.to_string())
        .with_api_url(server.url())
        .build_bot()
}

fn chat() -> Chat {
    Chat {
        id: 123,
        chat_type: "private".to_string(),
    }
}

/// **Test: send_message posts the text to the chat.**
#[tokio::test]
async fn test_send_message_posts_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJsonString(
            r#"{"chat_id": 123, "text": "hola"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(telegram_bot(&server));
    adapter.send_message(&chat(), "hola").await.unwrap();

    mock.assert_async().await;
}

/// **Test: send_markdown sets parse_mode Markdown.**
#[tokio::test]
async fn test_send_markdown_sets_parse_mode() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJsonString(
            r#"{"parse_mode": "Markdown"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(telegram_bot(&server));
    adapter.send_markdown(&chat(), "*Ayuda*").await.unwrap();

    mock.assert_async().await;
}

/// **Test: send_photo uploads the in-memory bytes under the given file name, with caption.**
#[tokio::test]
async fn test_send_photo_uploads_multipart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendPhoto"))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("chart\\.png".to_string()),
            Matcher::Regex("Commits por Rama".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(telegram_bot(&server));
    let photo = Photo::new(b"not really a png".to_vec(), "chart.png").with_caption("Commits por Rama");
    adapter.send_photo(&chat(), photo).await.unwrap();

    mock.assert_async().await;
}

/// **Test: a Telegram API error surfaces as CoreError::Bot with the API description.**
#[tokio::test]
async fn test_api_error_maps_to_core_bot_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", method_path("sendMessage"))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(telegram_bot(&server));
    let err = adapter.send_message(&chat(), "hola").await.unwrap_err();

    match err {
        CoreError::Bot(message) => assert!(message.to_lowercase().contains("chat not found")),
        other => panic!("expected CoreError::Bot, got {other:?}"),
    }
}

/// **Test: announce stores the bot username in the router and publishes the command menu.**
#[tokio::test]
async fn test_announce_sets_username_and_publishes_menu() {
    let mut server = Server::new_async().await;
    let get_me = server
        .mock("POST", method_path("getMe"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "ok": true,
            "result": {
                "id": 123456789,
                "is_bot": true,
                "first_name": "RepoChart",
                "username": "repochartbot",
                "can_join_groups": true,
                "can_read_all_group_messages": false,
                "supports_inline_queries": false,
                "can_connect_to_business": false,
                "has_main_web_app": false
            }
        }"#,
        )
        .create_async()
        .await;
    let set_commands = server
        .mock("POST", method_path("setMyCommands"))
        .match_body(Matcher::Regex("grafica".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true}"#)
        .create_async()
        .await;

    let router = CommandRouter::new(Arc::new(tokio::sync::RwLock::new(None)));
    let menu = [("help", "Muestra la ayuda"), ("grafica", "Gráfica de commits")];

    let username = announce(&telegram_bot(&server), &router, &menu)
        .await
        .unwrap();

    get_me.assert_async().await;
    set_commands.assert_async().await;
    assert_eq!(username.as_deref(), Some("repochartbot"));
    assert_eq!(
        router.bot_username().read().await.as_deref(),
        Some("repochartbot")
    );
}

/// **Test: a rejected token makes announce fail and leaves the username unset.**
#[tokio::test]
async fn test_announce_fails_when_token_rejected() {
    let mut server = Server::new_async().await;
    let _get_me = server
        .mock("POST", method_path("getMe"))
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#)
        .create_async()
        .await;

    let router = CommandRouter::new(Arc::new(tokio::sync::RwLock::new(None)));

    let err = announce(&telegram_bot(&server), &router, &[])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("getMe"));
    assert!(router.bot_username().read().await.is_none());
}
