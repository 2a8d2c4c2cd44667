use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9A-Za-z_-]+)$").expect("valid regex"));

#[derive(Clone, PartialEq, Eq, Hash)]
/// Bot API token as issued by `@BotFather` (`<bot id>:<secret>`).
///
/// Invariant: matches `digits:alphanumeric-or-dash` exactly. The secret
/// never shows up in `Debug` output.
pub struct BotToken(String);

impl BotToken {
    /// Create a validated [`BotToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !TOKEN_PATTERN.is_match(&value) {
            return Err(ValidationError::IncorrectToken);
        }
        Ok(Self(value))
    }

    /// Numeric bot id, the part before the colon.
    pub fn bot_id(&self) -> Option<i64> {
        self.0.split_once(':').and_then(|(id, _)| id.parse().ok())
    }

    /// Borrow the full secret token. Avoid logging the returned value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Text formatting directive understood by the Bot API (`parse_mode`).
///
/// The value is kept as given so that requests can carry modes read from user
/// input; [`ParseMode::validate`] checks membership. The empty mode means
/// "server default" and is omitted on the wire.
pub struct ParseMode(Cow<'static, str>);

impl ParseMode {
    pub const NONE: Self = Self(Cow::Borrowed(""));
    pub const MARKDOWN_V2: Self = Self(Cow::Borrowed("MarkdownV2"));
    pub const MARKDOWN: Self = Self(Cow::Borrowed("Markdown"));
    pub const HTML: Self = Self(Cow::Borrowed("HTML"));

    const KNOWN: [&'static str; 4] = ["", "MarkdownV2", "Markdown", "HTML"];

    /// Wrap a raw mode without checking it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if Self::KNOWN.contains(&self.as_str()) {
            return Ok(());
        }
        Err(ValidationError::UnknownParseMode {
            input: self.0.clone().into_owned(),
        })
    }
}

impl FromStr for ParseMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = Self::new(s);
        mode.validate()?;
        Ok(mode)
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
