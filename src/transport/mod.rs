//! Transport layer: Bot API wire format (JSON bodies, response envelope) and
//! token redaction.

mod envelope;
mod message;
mod redact;

pub use envelope::{EnvelopeOutcome, decode_envelope};
pub use message::{encode_delete_message, encode_edit_message, encode_send_message};
pub use redact::redact_token;
