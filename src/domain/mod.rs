//! Domain layer: request and response types with validation (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    DeleteMessage, EditMessage, EditOptions, MAX_TEXT_SIZE, SendMessage, SendOptions,
};
pub use response::{ApiError, Message, User};
pub use validation::ValidationError;
pub use value::{BotToken, ParseMode};
