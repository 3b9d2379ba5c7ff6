use std::env;

use chrono_tz::Tz;
use serde::Serialize;

use crate::errors::SummaryError;

/// Zone used for the trailing date line when `SUMMARY_TIMEZONE` is unset.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Placeholder value shipped in the sample environment file.
const PLACEHOLDER_API_KEY: &str = "your_tavily_api_key_here";

const MIN_API_KEY_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_api_key: Option<String>,
    pub summary_timezone: Tz,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummaryError> {
        let search_api_key = env::var("SEARCH_API_KEY")
            .or_else(|_| env::var("TAVILY_API_KEY"))
            .ok();

        let summary_timezone = match env::var("SUMMARY_TIMEZONE") {
            Ok(name) => parse_timezone(&name)?,
            Err(_) => DEFAULT_TIMEZONE,
        };

        Ok(Self {
            search_api_key,
            summary_timezone,
        })
    }

    /// Reports whether the search provider key looks usable.
    #[must_use]
    pub fn api_key_status(&self) -> ApiKeyStatus {
        let Some(key) = self.search_api_key.as_deref().filter(|k| !k.is_empty()) else {
            return ApiKeyStatus::invalid("APIキーが設定されていません");
        };

        if key == PLACEHOLDER_API_KEY {
            return ApiKeyStatus::invalid("デフォルトのAPIキーが設定されています");
        }

        if key.chars().count() < MIN_API_KEY_LEN {
            return ApiKeyStatus::invalid("APIキーの形式が正しくありません");
        }

        ApiKeyStatus {
            status: KeyState::Valid,
            message: "APIキーが設定されています".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_api_key: None,
            summary_timezone: DEFAULT_TIMEZONE,
        }
    }
}

/// Parses an IANA zone name such as `Asia/Tokyo`.
pub fn parse_timezone(name: &str) -> Result<Tz, SummaryError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| SummaryError::Config(format!("SUMMARY_TIMEZONE: {e}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyState {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyStatus {
    pub status: KeyState,
    pub message: String,
}

impl ApiKeyStatus {
    fn invalid(message: &str) -> Self {
        Self {
            status: KeyState::Invalid,
            message: message.to_string(),
        }
    }
}
