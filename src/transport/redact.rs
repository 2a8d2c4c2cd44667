use std::sync::LazyLock;

use regex::Regex;

use crate::domain::BotToken;

pub const REDACTED: &str = "<redacted>";

static TOKEN_PATH_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/bot[0-9]+:[0-9A-Za-z_-]+").expect("valid regex"));

/// Replace every `/bot<token>` path segment, and any bare occurrence of
/// `token`, with [`REDACTED`].
pub fn redact_token(text: &str, token: &BotToken) -> String {
    let replacement = format!("/bot{REDACTED}");
    let redacted = TOKEN_PATH_SEGMENT.replace_all(text, replacement.as_str());
    redacted.replace(token.expose(), REDACTED)
}
