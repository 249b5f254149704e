use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::utilities::text_utils::{self, Utf16Len};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Url,
    CustomUrl(String),
    Mention,
    Hashtag,
    BotCommand,
}

/// A classified span of message text. `offset` and `length` count Unicode code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityInText {
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
}

impl EntityInText {
    pub const fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self { kind, offset, length }
    }

    pub fn payload(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::CustomUrl(url) => Some(url),
            _ => None,
        }
    }

    /// Converts the span to UTF-16 code units, as used by Telegram API entities.
    /// Returns `None` when the span does not fit in `text`.
    pub fn utf16_range(&self, text: &str) -> Option<Range<usize>> {
        let before = text_utils::char_slice(text, 0, self.offset)?;
        let span = text_utils::char_slice(text, self.offset, self.length)?;

        let start = before.utf16_len();
        Some(start..start + span.utf16_len())
    }
}

impl fmt::Display for EntityInText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntityKind::Url => write!(f, "url")?,
            EntityKind::CustomUrl(url) => write!(f, "custom url ({url})")?,
            EntityKind::Mention => write!(f, "mention")?,
            EntityKind::Hashtag => write!(f, "hashtag")?,
            EntityKind::BotCommand => write!(f, "bot command")?,
        }

        write!(f, " at {}+{}", self.offset, self.length)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpandLinksMode {
    #[default]
    None,
    All,
}
