//! Integration tests for [`command_router::CommandRouter`].
//!
//! Covers: routing by command name, aliases sharing one handler, unknown commands and plain text being
//! ignored, commands addressed to other bots, and handler errors surfacing to the caller without
//! poisoning later dispatches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use command_router::CommandRouter;
use repochart_core::{
    Chat, Command, CommandHandler, CoreError, HandlerResponse, Message, User,
};
use tokio::sync::RwLock;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

fn no_username() -> Arc<RwLock<Option<String>>> {
    Arc::new(RwLock::new(None))
}

/// Counts calls and records the last command seen.
struct CountingHandler {
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<Command>>>,
}

impl CountingHandler {
    fn new() -> (Arc<Self>, Arc<AtomicUsize>, Arc<Mutex<Option<Command>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));
        (
            Arc::new(Self {
                calls: calls.clone(),
                last: last.clone(),
            }),
            calls,
            last,
        )
    }
}

#[async_trait::async_trait]
impl CommandHandler for CountingHandler {
    fn name(&self) -> &str {
        "counting"
    }

    async fn handle(
        &self,
        _message: &Message,
        command: &Command,
    ) -> repochart_core::Result<HandlerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(command.clone());
        Ok(HandlerResponse::Text)
    }
}

struct FailingHandler;

#[async_trait::async_trait]
impl CommandHandler for FailingHandler {
    fn name(&self) -> &str {
        "failing"
    }

    async fn handle(
        &self,
        _message: &Message,
        _command: &Command,
    ) -> repochart_core::Result<HandlerResponse> {
        Err(CoreError::Bot("network down".to_string()))
    }
}

/// **Test: a registered command reaches its handler with parsed arguments.**
#[tokio::test]
async fn test_routes_command_with_arguments() {
    let (handler, calls, last) = CountingHandler::new();
    let router = CommandRouter::new(no_username()).add_command("grafica", handler);

    let response = router
        .handle(&create_test_message("/grafica feature x"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Text);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let seen = last.lock().unwrap().clone().unwrap();
    assert_eq!(seen.argument_text().as_deref(), Some("feature x"));
}

/// **Test: /start and /help share one handler.**
#[tokio::test]
async fn test_aliases_share_handler() {
    let (handler, calls, _) = CountingHandler::new();
    let router = CommandRouter::new(no_username())
        .add_command("start", handler.clone())
        .add_command("/help", handler);

    router.handle(&create_test_message("/start")).await.unwrap();
    router.handle(&create_test_message("/help")).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(router.commands(), vec!["help".to_string(), "start".to_string()]);
}

/// **Test: unknown commands and plain text are ignored; no handler runs.**
#[tokio::test]
async fn test_unknown_and_plain_text_ignored() {
    let (handler, calls, _) = CountingHandler::new();
    let router = CommandRouter::new(no_username()).add_command("grafica", handler);

    for text in ["/unknown", "hola", "", "grafica"] {
        let response = router.handle(&create_test_message(text)).await.unwrap();
        assert_eq!(response, HandlerResponse::Ignored, "text: {:?}", text);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// **Test: commands for another bot are ignored once the username is known; own username is accepted.**
#[tokio::test]
async fn test_command_target_checked_against_bot_username() {
    let username = Arc::new(RwLock::new(Some("repochart_bot".to_string())));
    let (handler, calls, _) = CountingHandler::new();
    let router = CommandRouter::new(username).add_command("grafica", handler);

    let other = router
        .handle(&create_test_message("/grafica@other_bot"))
        .await
        .unwrap();
    assert_eq!(other, HandlerResponse::Ignored);

    let own = router
        .handle(&create_test_message("/grafica@RepoChart_Bot"))
        .await
        .unwrap();
    assert_eq!(own, HandlerResponse::Text);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// **Test: a handler error is returned to the caller and the next command still dispatches.**
#[tokio::test]
async fn test_handler_error_does_not_block_next_command() {
    let (handler, calls, _) = CountingHandler::new();
    let router = CommandRouter::new(no_username())
        .add_command("resumen", Arc::new(FailingHandler))
        .add_command("help", handler);

    let failed = router.handle(&create_test_message("/resumen")).await;
    assert!(matches!(failed, Err(CoreError::Bot(_))));

    let ok = router.handle(&create_test_message("/help")).await.unwrap();
    assert_eq!(ok, HandlerResponse::Text);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// **Test: the router reports the registered handler's own name, for any alias spelling.**
#[test]
fn test_handler_name_resolves_registered_handler() {
    let (handler, _, _) = CountingHandler::new();
    let router = CommandRouter::new(no_username())
        .add_command("grafica", handler)
        .add_command("broken", Arc::new(FailingHandler));

    assert_eq!(router.handler_name("/Grafica"), Some("counting"));
    assert_eq!(router.handler_name("broken"), Some("failing"));
    assert_eq!(router.handler_name("resumen"), None);
}
