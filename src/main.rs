use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tg::{
    DeleteMessage, EditMessage, EditOptions, MAX_TEXT_SIZE, ParseMode, SendMessage, SendOptions,
    TgClient,
};

#[derive(Debug, Parser)]
#[command(name = "tg", version, about = "Send, edit and delete Telegram messages as a bot")]
struct Cli {
    /// Bot token
    #[arg(long, env = "TG_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Bot API server (defaults to https://api.telegram.org)
    #[arg(long, env = "TG_API_SERVER", global = true)]
    api_server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send message
    Send(SendArgs),
    /// Edit message
    Edit(EditArgs),
    /// Delete message
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct SendArgs {
    /// Chat id
    #[arg(long, allow_negative_numbers = true)]
    chat_id: i64,
    /// Text (use - to read stdin)
    #[arg(long)]
    text: String,
    /// Parse mode
    #[arg(long, default_value = "Markdown")]
    parse_mode: String,
    /// Message thread id
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    message_thread_id: i64,
    /// Disable web page preview
    #[arg(long)]
    disable_web_page_preview: bool,
    /// Disable notification
    #[arg(long)]
    disable_notification: bool,
    /// Protect content
    #[arg(long)]
    protect_content: bool,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Chat id
    #[arg(long, allow_negative_numbers = true)]
    chat_id: i64,
    /// Message id
    #[arg(long, allow_negative_numbers = true)]
    message_id: i64,
    /// Text (use - to read stdin)
    #[arg(long)]
    text: String,
    /// Parse mode
    #[arg(long, default_value = "Markdown")]
    parse_mode: String,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Chat id
    #[arg(long, allow_negative_numbers = true)]
    chat_id: i64,
    /// Message id
    #[arg(long, allow_negative_numbers = true)]
    message_id: i64,
}

impl SendArgs {
    fn into_request(self, stdin: impl Read) -> Result<SendMessage> {
        let text = read_text(self.text, stdin)?;
        let options = SendOptions {
            parse_mode: ParseMode::new(self.parse_mode),
            message_thread_id: self.message_thread_id,
            disable_web_page_preview: self.disable_web_page_preview,
            disable_notification: self.disable_notification,
            protect_content: self.protect_content,
        };
        Ok(SendMessage::new(self.chat_id, text, options)?)
    }
}

impl EditArgs {
    fn into_request(self, stdin: impl Read) -> Result<EditMessage> {
        let text = read_text(self.text, stdin)?;
        let options = EditOptions {
            parse_mode: ParseMode::new(self.parse_mode),
        };
        Ok(EditMessage::new(self.chat_id, self.message_id, text, options)?)
    }
}

fn read_text(text: String, stdin: impl Read) -> io::Result<String> {
    if text != "-" {
        return Ok(text);
    }
    let mut buf = Vec::new();
    stdin.take(MAX_TEXT_SIZE as u64).read_to_end(&mut buf)?;
    let mut text = String::from_utf8_lossy(&buf).into_owned();
    // The cap can split a character, and its replacement char is wider.
    let mut end = text.len().min(MAX_TEXT_SIZE);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    Ok(text)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let token = cli
        .token
        .context("missing bot token: pass --token or set TG_TOKEN")?;
    // Tolerate the trailing newline of `TG_TOKEN=$(cat token.txt)`.
    let mut builder = TgClient::builder(token.trim());
    if let Some(server) = cli.api_server {
        builder = builder.api_server(server);
    }
    let client = builder.build()?;

    match cli.command {
        Command::Send(args) => {
            let request = args.into_request(io::stdin())?;
            let chat_id = request.chat_id;
            let me = client.get_me().await?;
            let message = client.send_message(request).await?;
            info!(
                bot = %me.first_name,
                chat_id,
                message_id = message.message_id,
                "Success send message"
            );
        }
        Command::Edit(args) => {
            let request = args.into_request(io::stdin())?;
            let chat_id = request.chat_id;
            let me = client.get_me().await?;
            let message = client.edit_message(request).await?;
            info!(
                bot = %me.first_name,
                chat_id,
                message_id = message.message_id,
                "Success edit message"
            );
        }
        Command::Delete(args) => {
            let request = DeleteMessage::new(args.chat_id, args.message_id)?;
            let me = client.get_me().await?;
            client.delete_message(request).await?;
            info!(
                bot = %me.first_name,
                chat_id = request.chat_id,
                message_id = request.message_id,
                "Success delete message"
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
