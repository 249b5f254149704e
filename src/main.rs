use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tg_links::click_context::{ClickContext, MouseButton, Peer, ShowAt};
use tg_links::click_handler::ClickHandler;
use tg_links::dispatcher::{self, LinkSpan};
use tg_links::entity::ExpandLinksMode;
use tg_links::local_url::LocalUrl;
use tg_links::url_normalizer;
use tg_links::utilities::config::{self, Config};
use tg_links::utilities::logchamp;
use tg_links::utilities::text_utils::CharLen;

#[derive(Parser)]
#[command(version, about = "Inspect how Telegram message links behave")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite telegram.me links into tg:// links
    Normalize {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Describe the in-app action of a tg:// link
    Parse { url: String },
    /// Click a link and print what the app would be asked to do
    Click {
        kind: Kind,
        /// Displayed text of the link
        text: String,
        /// Target of a hidden link
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_enum, default_value_t = Button::Left)]
        button: Button,
        /// Chat the link is clicked in
        #[arg(long, allow_hyphen_values = true)]
        chat: Option<i64>,
    },
    /// Print text with a hidden link expanded for copying
    Expand {
        text: String,
        #[arg(long)]
        url: String,
        /// Defaults to the configured mode
        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Url,
    HiddenUrl,
    Mention,
    Hashtag,
    BotCommand,
}

#[derive(Clone, Copy, ValueEnum)]
enum Button {
    Left,
    Middle,
    Right,
}

impl From<Button> for MouseButton {
    fn from(value: Button) -> Self {
        match value {
            Button::Left => Self::Left,
            Button::Middle => Self::Middle,
            Button::Right => Self::Right,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    None,
    All,
}

impl From<Mode> for ExpandLinksMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::None => Self::None,
            Mode::All => Self::All,
        }
    }
}

fn build_handler(kind: Kind, text: &str, url: Option<String>) -> Result<ClickHandler, String> {
    let handler = match kind {
        Kind::Url => ClickHandler::url(text),
        Kind::HiddenUrl => {
            ClickHandler::hidden_url(url.ok_or("hidden links need a target (--url)")?)
        }
        Kind::Mention => ClickHandler::mention(text),
        Kind::Hashtag => ClickHandler::hashtag(text),
        Kind::BotCommand => ClickHandler::bot_command(text),
    };

    Ok(handler)
}

/// Prints every request instead of carrying it out.
struct ConsoleContext {
    chat: Option<Peer>,
}

impl ClickContext for ConsoleContext {
    fn open_url(&mut self, url: &str) -> bool {
        println!("open in browser: {url}");
        true
    }

    fn open_file(&mut self, path: &str) {
        println!("open file: {path}");
    }

    fn open_local_url(&mut self, url: &str) {
        match LocalUrl::parse(url) {
            Ok(link) => println!("in app: {link}"),
            Err(err) => {
                log::warn!("{url}: {err}");
                println!("in app: {url}");
            }
        }
    }

    fn confirm_link(&mut self, url: &str) {
        println!("ask before opening: {url}");
    }

    fn open_peer_by_name(&mut self, username: &str, show_at: ShowAt) {
        println!("open @{username} ({show_at:?})");
    }

    fn search_by_hashtag(&mut self, tag: &str, peer: Option<Peer>) {
        match peer {
            Some(peer) => println!("search {tag} in {peer}"),
            None => println!("search {tag} everywhere"),
        }
    }

    fn show_peer_history(&mut self, peer: Peer, show_at: ShowAt) {
        println!("show {peer} ({show_at:?})");
    }

    fn send_bot_command(&mut self, peer: Peer, bot: Option<Peer>, command: &str) {
        match bot {
            Some(bot) => println!("send {command} to {peer} for bot {bot}"),
            None => println!("send {command} to {peer}"),
        }
    }

    fn insert_bot_command(&mut self, command: &str) {
        println!("insert {command} into the message field");
    }

    fn peer_for_mouse_action(&self) -> Option<Peer> {
        self.chat
    }

    fn hovered_item_author(&self) -> Option<Peer> {
        None
    }
}

fn run(command: Command, config: &Config) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Normalize { urls } => {
            for url in urls {
                println!("{}", url_normalizer::normalize(&url));
            }
        }
        Command::Parse { url } => println!("{}", LocalUrl::parse(&url)?),
        Command::Click { kind, text, url, button, chat } => {
            let handler = build_handler(kind, &text, url)?;
            let mut ctx = ConsoleContext { chat: chat.map(|id| Peer { id, is_user: id > 0 }) };
            dispatcher::dispatch_click(&handler, button.into(), &mut ctx);

            if let (Some(label), Some(copy_text)) =
                (dispatcher::copy_label(&handler, &config.labels), handler.copy_text())
            {
                println!("{label}: {copy_text}");
            }
            if let Some(tooltip) = handler.tooltip() {
                println!("tooltip: {tooltip}");
            }
            let entity = dispatcher::entity_in_text(&handler, &text, 0, text.char_len())?;
            println!("entity: {entity}");
        }
        Command::Expand { text, url, mode } => {
            let mode = mode.map_or(config.expand_links, ExpandLinksMode::from);
            let handler = ClickHandler::hidden_url(url);
            let links = [LinkSpan { handler, offset: 0, length: text.char_len() }];
            println!("{}", dispatcher::original_text(&text, &links, mode)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let log_file = env::var("LINKS_LOG").unwrap_or_else(|_| ".log".into());
    if let Err(err) = logchamp::init(&log_file) {
        eprintln!("failed to open {log_file}: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let config_path = env::var_os("LINKS_CONFIG")
        .map_or_else(|| PathBuf::from(config::DEFAULT_PATH), PathBuf::from);
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load {}: {err}", config_path.display());
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
