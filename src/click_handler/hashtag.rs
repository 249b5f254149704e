use crate::click_context::ClickContext;
use crate::entity::{EntityInText, EntityKind};
use crate::utilities::text_utils::CharLen;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashtagHandler {
    pub(super) tag: String,
}

impl HashtagHandler {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(super) fn on_click(&self, ctx: &mut dyn ClickContext) {
        let peer = ctx.peer_for_mouse_action();
        ctx.search_by_hashtag(&self.tag, peer);
    }

    pub(super) fn to_entity(&self, offset: usize, text_part: &str) -> EntityInText {
        EntityInText::new(EntityKind::Hashtag, offset, text_part.char_len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::click_context::Peer;
    use crate::utilities::test_fixtures::{RecordingContext, Request};

    #[test]
    fn test_search_in_chat() {
        let mut ctx = RecordingContext::with_peer(-100, false);
        HashtagHandler::new("#rust").on_click(&mut ctx);
        assert_eq!(
            ctx.requests,
            [Request::SearchByHashtag("#rust".into(), Some(Peer { id: -100, is_user: false }))]
        );
    }

    #[test]
    fn test_global_search() {
        let mut ctx = RecordingContext::default();
        HashtagHandler::new("#rust").on_click(&mut ctx);
        assert_eq!(ctx.requests, [Request::SearchByHashtag("#rust".into(), None)]);
    }
}
