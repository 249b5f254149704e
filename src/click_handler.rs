use std::fmt;

use crate::click_context::{ClickContext, MouseButton};
use crate::entity::{EntityInText, ExpandLinksMode};
use crate::lang::LangKey;

mod bot_command;
mod hashtag;
mod hidden_url;
mod mention;
mod plain_url;

pub use bot_command::BotCommandHandler;
pub use hashtag::HashtagHandler;
pub use hidden_url::HiddenUrlHandler;
pub use mention::MentionHandler;
pub use plain_url::UrlHandler;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickHandler {
    Url(UrlHandler),
    HiddenUrl(HiddenUrlHandler),
    Mention(MentionHandler),
    Hashtag(HashtagHandler),
    BotCommand(BotCommandHandler),
}

impl ClickHandler {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(UrlHandler::new(url))
    }

    pub fn hidden_url(url: impl Into<String>) -> Self {
        Self::HiddenUrl(HiddenUrlHandler::new(url))
    }

    pub fn mention(tag: impl Into<String>) -> Self {
        Self::Mention(MentionHandler::new(tag))
    }

    pub fn hashtag(tag: impl Into<String>) -> Self {
        Self::Hashtag(HashtagHandler::new(tag))
    }

    pub fn bot_command(cmd: impl Into<String>) -> Self {
        Self::BotCommand(BotCommandHandler::new(cmd))
    }

    pub fn on_click(&self, button: MouseButton, ctx: &mut dyn ClickContext) {
        if !button.activates() {
            log::debug!("ignoring {button:?} click on {self}");
            return;
        }

        match self {
            Self::Url(handler) => handler.on_click(ctx),
            Self::HiddenUrl(handler) => handler.on_click(ctx),
            Self::Mention(handler) => handler.on_click(ctx),
            Self::Hashtag(handler) => handler.on_click(ctx),
            Self::BotCommand(handler) => handler.on_click(ctx),
        }
    }

    pub fn copy_label(&self) -> Option<LangKey> {
        match self {
            Self::Url(handler) => Some(handler.copy_label()),
            Self::HiddenUrl(handler) => Some(handler.copy_label()),
            Self::Mention(_) => Some(LangKey::ContextCopyMention),
            Self::Hashtag(_) => Some(LangKey::ContextCopyHashtag),
            Self::BotCommand(_) => None,
        }
    }

    /// What the "copy" context action puts on the clipboard.
    pub fn copy_text(&self) -> Option<String> {
        match self {
            Self::Url(handler) => Some(handler.url().into_owned()),
            Self::HiddenUrl(handler) => Some(handler.url().into_owned()),
            Self::Mention(MentionHandler { tag }) | Self::Hashtag(HashtagHandler { tag }) => {
                Some(tag.clone())
            }
            Self::BotCommand(_) => None,
        }
    }

    pub fn tooltip(&self) -> Option<String> {
        match self {
            Self::Url(handler) => handler.tooltip(),
            Self::HiddenUrl(handler) => Some(handler.url().into_owned()),
            Self::Mention(_) | Self::Hashtag(_) | Self::BotCommand(_) => None,
        }
    }

    pub fn expanded_text(&self, mode: ExpandLinksMode, text_part: &str) -> String {
        match self {
            Self::Url(handler) => handler.expanded_text(mode),
            Self::HiddenUrl(handler) => handler.expanded_text(mode, text_part),
            Self::Mention(_) | Self::Hashtag(_) | Self::BotCommand(_) => String::new(),
        }
    }

    pub fn to_entity(&self, offset: usize, text_part: &str) -> EntityInText {
        match self {
            Self::Url(handler) => handler.to_entity(offset, text_part),
            Self::HiddenUrl(handler) => handler.to_entity(offset, text_part),
            Self::Mention(handler) => handler.to_entity(offset, text_part),
            Self::Hashtag(handler) => handler.to_entity(offset, text_part),
            Self::BotCommand(handler) => handler.to_entity(offset, text_part),
        }
    }
}

impl fmt::Display for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(handler) => write!(f, "url {:?}", handler.original_url()),
            Self::HiddenUrl(handler) => write!(f, "hidden url {:?}", handler.url()),
            Self::Mention(MentionHandler { tag }) => write!(f, "mention {tag}"),
            Self::Hashtag(HashtagHandler { tag }) => write!(f, "hashtag {tag}"),
            Self::BotCommand(BotCommandHandler { cmd }) => write!(f, "bot command {cmd}"),
        }
    }
}
