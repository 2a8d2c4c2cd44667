use serde::Serialize;

use crate::domain::{DeleteMessage, EditMessage, SendMessage};

#[derive(Debug, Serialize)]
pub struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    parse_mode: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    message_thread_id: i64,
    #[serde(skip_serializing_if = "is_false")]
    disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "is_false")]
    disable_notification: bool,
    #[serde(skip_serializing_if = "is_false")]
    protect_content: bool,
}

#[derive(Debug, Serialize)]
pub struct EditMessageBody<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    parse_mode: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DeleteMessageBody {
    chat_id: i64,
    message_id: i64,
}

pub fn encode_send_message(request: &SendMessage) -> SendMessageBody<'_> {
    let options = &request.options;
    SendMessageBody {
        chat_id: request.chat_id,
        text: &request.text,
        parse_mode: options.parse_mode.as_str(),
        message_thread_id: options.message_thread_id,
        disable_web_page_preview: options.disable_web_page_preview,
        disable_notification: options.disable_notification,
        protect_content: options.protect_content,
    }
}

pub fn encode_edit_message(request: &EditMessage) -> EditMessageBody<'_> {
    EditMessageBody {
        chat_id: request.chat_id,
        message_id: request.message_id,
        text: &request.text,
        parse_mode: request.options.parse_mode.as_str(),
    }
}

pub fn encode_delete_message(request: &DeleteMessage) -> DeleteMessageBody {
    DeleteMessageBody {
        chat_id: request.chat_id,
        message_id: request.message_id,
    }
}

fn is_empty(value: &&str) -> bool {
    value.is_empty()
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::{EditOptions, ParseMode, SendOptions};

    use super::*;

    fn to_value(body: impl Serialize) -> Value {
        serde_json::to_value(body).unwrap()
    }

    #[test]
    fn send_omits_default_fields() {
        let req = SendMessage::new(42, "hello", SendOptions::default()).unwrap();
        assert_eq!(
            to_value(encode_send_message(&req)),
            json!({ "chat_id": 42, "text": "hello" })
        );
    }

    #[test]
    fn send_includes_every_set_option() {
        let options = SendOptions {
            parse_mode: ParseMode::MARKDOWN_V2,
            message_thread_id: 9,
            disable_web_page_preview: true,
            disable_notification: true,
            protect_content: true,
        };
        let req = SendMessage::new(-100123, "*hi*", options).unwrap();
        assert_eq!(
            to_value(encode_send_message(&req)),
            json!({
                "chat_id": -100123,
                "text": "*hi*",
                "parse_mode": "MarkdownV2",
                "message_thread_id": 9,
                "disable_web_page_preview": true,
                "disable_notification": true,
                "protect_content": true
            })
        );
    }

    #[test]
    fn edit_and_delete_always_carry_message_id() {
        let options = EditOptions {
            parse_mode: ParseMode::HTML,
        };
        let req = EditMessage::new(1, 5, "<b>x</b>", options).unwrap();
        assert_eq!(
            to_value(encode_edit_message(&req)),
            json!({ "chat_id": 1, "message_id": 5, "text": "<b>x</b>", "parse_mode": "HTML" })
        );

        let req = DeleteMessage::new(1, 5).unwrap();
        assert_eq!(
            to_value(encode_delete_message(&req)),
            json!({ "chat_id": 1, "message_id": 5 })
        );
    }
}
