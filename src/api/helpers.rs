//! Response envelopes shared by the API handlers.
//!
//! Every response is `{ "statusCode": u16, "body": "<json string>" }`.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

/// Returns a 200 OK response with `payload` serialized as the body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    match serde_json::to_string(payload) {
        Ok(body) => json!({ "statusCode": 200, "body": body }),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            err_response(500, "レスポンスの生成に失敗しました")
        }
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a search provider error to the message shown to users.
#[must_use]
pub fn describe_search_error(message: &str) -> String {
    if message.contains("API key") {
        "APIキーが無効です".to_string()
    } else if message.contains("rate limit") {
        "APIの利用制限に達しました。しばらく後に再試行してください".to_string()
    } else {
        message.to_string()
    }
}
