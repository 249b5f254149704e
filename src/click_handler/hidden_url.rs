use std::borrow::Cow;

use super::plain_url::{UrlHandler, complete_url};
use crate::click_context::ClickContext;
use crate::entity::{EntityInText, EntityKind, ExpandLinksMode};
use crate::lang::LangKey;
use crate::url_normalizer;
use crate::utilities::text_utils::CharLen;

/// A link hidden behind custom text. The target is only revealed on click,
/// in the tooltip, or when links are fully expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenUrlHandler {
    url: String,
}

impl HiddenUrlHandler {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> Cow<'_, str> {
        complete_url(&self.url)
    }

    pub(super) fn on_click(&self, ctx: &mut dyn ClickContext) {
        let url = self.url();

        if url_normalizer::is_email(&url) {
            UrlHandler::open_url(&url, ctx);
            return;
        }

        let url = url_normalizer::normalize(&url);

        if url_normalizer::is_local(&url) {
            ctx.open_local_url(&url);
        } else {
            ctx.confirm_link(&url);
        }
    }

    pub(super) fn copy_label(&self) -> LangKey {
        if url_normalizer::is_email(&self.url) {
            LangKey::ContextCopyEmail
        } else {
            LangKey::ContextCopyLink
        }
    }

    pub(super) fn expanded_text(&self, mode: ExpandLinksMode, text_part: &str) -> String {
        match mode {
            ExpandLinksMode::None => String::new(),
            ExpandLinksMode::All => format!("{text_part} ({})", self.url()),
        }
    }

    pub(super) fn to_entity(&self, offset: usize, text_part: &str) -> EntityInText {
        let kind = EntityKind::CustomUrl(self.url().into_owned());
        EntityInText::new(kind, offset, text_part.char_len())
    }
}
