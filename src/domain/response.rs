use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Deserialize;

/// Bot account identity returned by `getMe`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// The subset of a Bot API `Message` returned by `sendMessage` and
/// `editMessageText` that this client exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Unix time in seconds.
    pub date: i64,
}

impl Message {
    /// `date` as a [`SystemTime`]; `None` for negative timestamps.
    pub fn sent_at(&self) -> Option<SystemTime> {
        let secs = u64::try_from(self.date).ok()?;
        UNIX_EPOCH.checked_add(Duration::from_secs(secs))
    }
}

/// Failure reported by the Bot API itself (`"ok": false`).
///
/// Displays as the server's `description`, which is the authoritative message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiError {
    code: Option<i32>,
    description: String,
    retry_after: Option<u64>,
    migrate_to_chat_id: Option<i64>,
}

impl ApiError {
    pub(crate) fn new(
        code: Option<i32>,
        description: Option<String>,
        retry_after: Option<u64>,
        migrate_to_chat_id: Option<i64>,
    ) -> Self {
        Self {
            code,
            description: description.unwrap_or_default(),
            retry_after,
            migrate_to_chat_id,
        }
    }

    /// `error_code`, usually mirroring the HTTP status.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Server-suggested backoff (`parameters.retry_after`). Advisory only.
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after.map(Duration::from_secs)
    }

    /// New supergroup id when a group was migrated (`parameters.migrate_to_chat_id`).
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.migrate_to_chat_id
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for ApiError {}
