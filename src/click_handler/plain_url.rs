use std::borrow::Cow;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use url::Url;

use crate::click_context::ClickContext;
use crate::entity::{EntityInText, EntityKind, ExpandLinksMode};
use crate::lang::LangKey;
use crate::url_normalizer;
use crate::utilities::text_utils::CharLen;

static SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+:").unwrap());

/// Characters that can't appear raw in a link handed to the platform.
const URL_TEXT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Prefixes `http://` to links written without a scheme and encodes links that
/// aren't plain ASCII. Email addresses are left alone.
pub(super) fn complete_url(url: &str) -> Cow<'_, str> {
    if url.is_empty() || url_normalizer::is_email(url) {
        return Cow::Borrowed(url);
    }

    let url =
        if SCHEME.is_match(url) { Cow::Borrowed(url) } else { Cow::Owned(format!("http://{url}")) };

    if url.bytes().all(|byte| byte.is_ascii_graphic()) {
        return url;
    }

    Url::parse(&url).map_or_else(
        |_| Cow::Owned(utf8_percent_encode(&url, URL_TEXT).to_string()),
        |parsed| Cow::Owned(parsed.into()),
    )
}

/// A link shown as its own text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlHandler {
    original_url: String,
    full_displayed: bool,
}

impl UrlHandler {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self { original_url: original_url.into(), full_displayed: true }
    }

    /// A link whose displayed text was shortened by the layout.
    pub fn elided(original_url: impl Into<String>) -> Self {
        Self { original_url: original_url.into(), full_displayed: false }
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn is_email(&self) -> bool {
        url_normalizer::is_email(&self.original_url)
    }

    pub fn url(&self) -> Cow<'_, str> {
        complete_url(&self.original_url)
    }

    pub fn readable(&self) -> Cow<'_, str> {
        percent_decode_str(&self.original_url)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(self.original_url.as_str()))
    }

    /// Opens `url` the way every link click does: email addresses go to the mail
    /// client, known Telegram links stay in the app, everything else goes to the platform.
    pub fn open_url(url: &str, ctx: &mut dyn ClickContext) {
        if url_normalizer::is_email(url) {
            open_email(url, ctx);
            return;
        }

        let url = url_normalizer::normalize(url);

        if url_normalizer::is_local(&url) {
            ctx.open_local_url(&url);
        } else if !ctx.open_url(&url) {
            log::warn!("no application opened {url:?}");
        }
    }

    pub(super) fn on_click(&self, ctx: &mut dyn ClickContext) {
        Self::open_url(&self.url(), ctx);
    }

    pub(super) fn copy_label(&self) -> LangKey {
        if self.is_email() {
            LangKey::ContextCopyEmail
        } else {
            LangKey::ContextCopyLink
        }
    }

    pub(super) fn tooltip(&self) -> Option<String> {
        (!self.full_displayed).then(|| self.readable().into_owned())
    }

    pub(super) fn expanded_text(&self, mode: ExpandLinksMode) -> String {
        match mode {
            ExpandLinksMode::None => String::new(),
            ExpandLinksMode::All => self.original_url.clone(),
        }
    }

    pub(super) fn to_entity(&self, offset: usize, text_part: &str) -> EntityInText {
        EntityInText::new(EntityKind::Url, offset, text_part.char_len())
    }
}

fn open_email(address: &str, ctx: &mut dyn ClickContext) {
    let mailto = format!("mailto:{address}");
    let mailto = Url::parse(&mailto).map_or(mailto, String::from);

    if !ctx.open_url(&mailto) {
        log::warn!("no mail client opened {mailto:?}, opening it as a file");
        ctx.open_file(&mailto);
    }
}
