use std::error::Error;
use std::fmt;

use crate::click_context::{ClickContext, MouseButton};
use crate::click_handler::ClickHandler;
use crate::entity::{EntityInText, EntityKind, ExpandLinksMode};
use crate::lang::Labels;
use crate::utilities::text_utils::{self, CharBoundaries, CharLen};

#[derive(Debug, PartialEq, Eq)]
pub enum SpanError {
    OutOfBounds { offset: usize, length: usize, text_length: usize },
    Overlapping { offset: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { offset, length, text_length } => {
                write!(f, "span {offset}+{length} is outside text of length {text_length}")
            }
            Self::Overlapping { offset } => {
                write!(f, "span at {offset} overlaps the previous one")
            }
        }
    }
}

impl Error for SpanError {}

/// A handler together with the span of rendered text it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkSpan {
    pub handler: ClickHandler,
    pub offset: usize,
    pub length: usize,
}

fn span(text: &str, offset: usize, length: usize) -> Result<&str, SpanError> {
    text_utils::char_slice(text, offset, length).ok_or_else(|| SpanError::OutOfBounds {
        offset,
        length,
        text_length: text.char_len(),
    })
}

pub fn dispatch_click(handler: &ClickHandler, button: MouseButton, ctx: &mut dyn ClickContext) {
    log::info!("{button:?} click on {handler}");
    handler.on_click(button, ctx);
}

pub fn entity_in_text(
    handler: &ClickHandler,
    text: &str,
    offset: usize,
    length: usize,
) -> Result<EntityInText, SpanError> {
    Ok(handler.to_entity(offset, span(text, offset, length)?))
}

pub fn expanded_link_text(
    handler: &ClickHandler,
    mode: ExpandLinksMode,
    text: &str,
    offset: usize,
    length: usize,
) -> Result<String, SpanError> {
    Ok(handler.expanded_text(mode, span(text, offset, length)?))
}

pub fn copy_label<'a>(handler: &ClickHandler, labels: &'a Labels) -> Option<&'a str> {
    handler.copy_label().map(|key| labels.get(key))
}

/// Rebuilds the handler for an entity previously extracted from `text`.
pub fn handler_for_entity(entity: &EntityInText, text: &str) -> Result<ClickHandler, SpanError> {
    let text_part = span(text, entity.offset, entity.length)?;

    let handler = match &entity.kind {
        EntityKind::Url => ClickHandler::url(text_part),
        EntityKind::CustomUrl(url) => ClickHandler::hidden_url(url.as_str()),
        EntityKind::Mention => ClickHandler::mention(text_part),
        EntityKind::Hashtag => ClickHandler::hashtag(text_part),
        EntityKind::BotCommand => ClickHandler::bot_command(text_part),
    };

    Ok(handler)
}

/// Checks that `links` are sorted, do not overlap, and fit in the text.
fn check_spans(links: &[LinkSpan], text_length: usize) -> Result<(), SpanError> {
    let mut previous_end = 0;

    for link in links {
        if link.offset < previous_end {
            return Err(SpanError::Overlapping { offset: link.offset });
        }

        let out_of_bounds =
            SpanError::OutOfBounds { offset: link.offset, length: link.length, text_length };
        previous_end = link
            .offset
            .checked_add(link.length)
            .filter(|end| *end <= text_length)
            .ok_or(out_of_bounds)?;
    }

    Ok(())
}

fn span_in<'a>(
    chars: &CharBoundaries<'a>,
    offset: usize,
    length: usize,
) -> Result<&'a str, SpanError> {
    chars.slice(offset, length).ok_or(SpanError::OutOfBounds {
        offset,
        length,
        text_length: chars.char_len(),
    })
}

pub fn entities(text: &str, links: &[LinkSpan]) -> Result<Vec<EntityInText>, SpanError> {
    let chars = CharBoundaries::new(text);
    check_spans(links, chars.char_len())?;

    links
        .iter()
        .map(|link| {
            let text_part = span_in(&chars, link.offset, link.length)?;
            Ok(link.handler.to_entity(link.offset, text_part))
        })
        .collect()
}

/// Serializes `text` for copying or export. Each link whose handler expands under
/// `mode` is replaced by its expansion; the rest of the text is kept as is.
/// `links` must be sorted by offset and must not overlap.
pub fn original_text(
    text: &str,
    links: &[LinkSpan],
    mode: ExpandLinksMode,
) -> Result<String, SpanError> {
    let chars = CharBoundaries::new(text);
    check_spans(links, chars.char_len())?;

    let mut result = String::with_capacity(text.len());
    let mut position = 0;

    for link in links {
        let text_part = span_in(&chars, link.offset, link.length)?;
        result.push_str(span_in(&chars, position, link.offset - position)?);

        let expanded = link.handler.expanded_text(mode, text_part);
        if expanded.is_empty() {
            result.push_str(text_part);
        } else {
            result.push_str(&expanded);
        }

        position = link.offset + link.length;
    }

    result.push_str(span_in(&chars, position, chars.char_len() - position)?);

    Ok(result)
}
