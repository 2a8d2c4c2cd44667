use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyChatId,
    EmptyText,
    TextTooLong { max: usize, actual: usize },
    UnknownParseMode { input: String },
    IncorrectMessageThreadId { actual: i64 },
    IncorrectMessageId { actual: i64 },
    IncorrectToken,
    EmptyMethod,
    BodyNotObject,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChatId => write!(f, "empty chat_id"),
            Self::EmptyText => write!(f, "empty text"),
            Self::TextTooLong { max, actual } => {
                write!(f, "text too long: {actual} bytes (max {max})")
            }
            Self::UnknownParseMode { input } => write!(f, "unknown parse_mode: {input:?}"),
            Self::IncorrectMessageThreadId { actual } => {
                write!(f, "incorrect message_thread_id: {actual}")
            }
            Self::IncorrectMessageId { actual } => write!(f, "incorrect message_id: {actual}"),
            Self::IncorrectToken => write!(f, "incorrect token"),
            Self::EmptyMethod => write!(f, "method name must not be empty"),
            Self::BodyNotObject => write!(f, "request body must serialize to a JSON object"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(ValidationError::EmptyChatId.to_string(), "empty chat_id");
        assert_eq!(ValidationError::EmptyText.to_string(), "empty text");

        let err = ValidationError::TextTooLong {
            max: 4096,
            actual: 4097,
        };
        assert_eq!(
            err.to_string(),
            "text too long: 4097 bytes (max 4096)"
        );

        let err = ValidationError::UnknownParseMode {
            input: "bbcode".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown parse_mode: \"bbcode\"");

        let err = ValidationError::IncorrectMessageThreadId { actual: -1 };
        assert_eq!(err.to_string(), "incorrect message_thread_id: -1");

        let err = ValidationError::IncorrectMessageId { actual: 0 };
        assert_eq!(err.to_string(), "incorrect message_id: 0");
    }
}
