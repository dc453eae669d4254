//! Integration tests for telegram-client.
//!
//! Most tests run against a one-shot HTTP stub on localhost.
//!
//! Run ignored tests (require a real bot):
//!   TELEGRAM_BOT_TOKEN=... TELEGRAM_CHAT_ID=... cargo test --test integration_tests -- --ignored

use serde_json::{json, Value};
use std::env;
use telegram_client::{ParseMode, SendParams, TelegramClient, TelegramConfig, TelegramError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A captured request: path and JSON body.
struct Captured {
    path: String,
    body: Value,
}

/// Serve exactly one request with a canned response.
async fn serve_once(status: u16, body: Value) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        // Read headers, then the body per Content-Length.
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
        }

        let path = head
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or_default()
            .to_string();
        let request_body =
            serde_json::from_slice(&buf[header_end..header_end + content_length]).unwrap_or(Value::Null);
        let _ = tx.send(Captured {
            path,
            body: request_body,
        });

        let payload = body.to_string();
        let response = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            payload.len(),
            payload
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{}", addr), rx)
}

fn client_for(api_url: &str) -> TelegramClient {
    TelegramClient::new(TelegramConfig::new("123:abc").with_api_url(api_url)).unwrap()
}

// ============================================================================
// Unit tests (no network)
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TelegramConfig::new("123:abc");
        assert_eq!(config.api_url, "https://api.telegram.org");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.send_message_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_config_trailing_slash() {
        let config = TelegramConfig::new("t").with_api_url("http://localhost:8081/");
        assert_eq!(config.send_message_url(), "http://localhost:8081/bott/sendMessage");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = TelegramConfig::new("very-secret-token");
        assert!(!format!("{:?}", config).contains("very-secret-token"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = TelegramClient::new(TelegramConfig::new(""));
        assert!(matches!(result, Err(TelegramError::Config(_))));
    }

    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        env::remove_var("TELEGRAM_BOT_TOKEN");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELEGRAM_TIMEOUT_SECS");
        assert!(matches!(
            TelegramConfig::from_env(),
            Err(TelegramError::Config(_))
        ));

        env::set_var("TELEGRAM_BOT_TOKEN", "42:xyz");
        env::set_var("TELEGRAM_API_URL", "http://localhost:9000");
        env::set_var("TELEGRAM_TIMEOUT_SECS", "5");
        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "42:xyz");
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);

        env::remove_var("TELEGRAM_BOT_TOKEN");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELEGRAM_TIMEOUT_SECS");
    }
}

mod send_params_tests {
    use super::*;

    #[test]
    fn test_plain_params_omit_parse_mode() {
        let params = SendParams::text("42", "Hello");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"chat_id": "42", "text": "Hello"})
        );
    }

    #[test]
    fn test_markdown_params() {
        let params = SendParams::markdown("42", "*Hello*");
        assert_eq!(params.parse_mode, Some(ParseMode::Markdown));
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"chat_id": "42", "text": "*Hello*", "parse_mode": "Markdown"})
        );
    }

    #[test]
    fn test_html_parse_mode_name() {
        let params = SendParams::text("1", "<b>x</b>").with_parse_mode(ParseMode::Html);
        assert_eq!(serde_json::to_value(&params).unwrap()["parse_mode"], "HTML");
    }
}

// ============================================================================
// Local stub tests
// ============================================================================

mod stub_tests {
    use super::*;

    #[tokio::test]
    async fn test_send_success() {
        let (url, captured) = serve_once(
            200,
            json!({"ok": true, "result": {"message_id": 7, "date": 1700000000}}),
        )
        .await;

        let result = client_for(&url)
            .send_markdown("42", "*Sunny*")
            .await
            .unwrap();
        assert_eq!(result.message_id, Some(7));

        let request = captured.await.unwrap();
        assert_eq!(request.path, "/bot123:abc/sendMessage");
        assert_eq!(
            request.body,
            json!({"chat_id": "42", "text": "*Sunny*", "parse_mode": "Markdown"})
        );
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let (url, _captured) = serve_once(
            400,
            json!({"ok": false, "error_code": 400, "description": "Bad Request: can't parse entities"}),
        )
        .await;

        let err = client_for(&url).send_markdown("42", "*broken").await.unwrap_err();
        match err {
            TelegramError::Api { status, description } => {
                assert_eq!(status, 400);
                assert!(description.contains("can't parse entities"));
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ok_false_is_error() {
        let (url, _captured) =
            serve_once(200, json!({"ok": false, "description": "chat not found"})).await;

        let err = client_for(&url).send_text("0", "hi").await.unwrap_err();
        assert!(matches!(err, TelegramError::Api { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let err = client_for("http://127.0.0.1:9")
            .send_text("42", "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, TelegramError::Http(_)));
        assert!(!err.to_string().contains("123:abc"));
    }
}

// ============================================================================
// Live tests (require a real bot)
// ============================================================================

mod live_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID"]
    async fn test_send_message() {
        let _ = dotenvy::dotenv();
        let chat_id = env::var("TELEGRAM_CHAT_ID").expect("TELEGRAM_CHAT_ID not set");
        let client = TelegramClient::from_env().unwrap();

        let result = client
            .send_text(&chat_id, "Test message from integration tests")
            .await;

        assert!(result.is_ok(), "Failed to send: {:?}", result.err());
    }
}
