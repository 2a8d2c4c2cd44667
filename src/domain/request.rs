use crate::domain::validation::ValidationError;
use crate::domain::value::ParseMode;

/// Maximum message text length accepted by the Bot API, in UTF-8 bytes.
pub const MAX_TEXT_SIZE: usize = 4096;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub parse_mode: ParseMode,
    /// Forum topic id; `0` means "no topic".
    pub message_thread_id: i64,
    pub disable_web_page_preview: bool,
    pub disable_notification: bool,
    pub protect_content: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOptions {
    pub parse_mode: ParseMode,
}

/// `sendMessage` request.
///
/// Fields are public so callers can adjust a request after construction;
/// [`SendMessage::validate`] is run again before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    pub options: SendOptions,
}

impl SendMessage {
    pub fn new(
        chat_id: i64,
        text: impl Into<String>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            chat_id,
            text: text.into(),
            options,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text_message(self.chat_id, &self.text, &self.options.parse_mode)?;
        if self.options.message_thread_id < 0 {
            return Err(ValidationError::IncorrectMessageThreadId {
                actual: self.options.message_thread_id,
            });
        }
        Ok(())
    }
}

/// `editMessageText` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: String,
    pub options: EditOptions,
}

impl EditMessage {
    pub fn new(
        chat_id: i64,
        message_id: i64,
        text: impl Into<String>,
        options: EditOptions,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            chat_id,
            message_id,
            text: text.into(),
            options,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text_message(self.chat_id, &self.text, &self.options.parse_mode)?;
        validate_message_id(self.message_id)
    }
}

/// `deleteMessage` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMessage {
    pub chat_id: i64,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: i64, message_id: i64) -> Result<Self, ValidationError> {
        let request = Self {
            chat_id,
            message_id,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_chat_id(self.chat_id)?;
        validate_message_id(self.message_id)
    }
}

// Rule order matters: the first failing rule is the one reported.
fn validate_text_message(
    chat_id: i64,
    text: &str,
    parse_mode: &ParseMode,
) -> Result<(), ValidationError> {
    validate_chat_id(chat_id)?;
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let len = text.len();
    if len > MAX_TEXT_SIZE {
        return Err(ValidationError::TextTooLong {
            max: MAX_TEXT_SIZE,
            actual: len,
        });
    }
    parse_mode.validate()
}

fn validate_chat_id(chat_id: i64) -> Result<(), ValidationError> {
    if chat_id == 0 {
        return Err(ValidationError::EmptyChatId);
    }
    Ok(())
}

fn validate_message_id(message_id: i64) -> Result<(), ValidationError> {
    if message_id <= 0 {
        return Err(ValidationError::IncorrectMessageId { actual: message_id });
    }
    Ok(())
}
