use crate::click_context::{ClickContext, ShowAt};
use crate::entity::{EntityInText, EntityKind};
use crate::utilities::text_utils::CharLen;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentionHandler {
    pub(super) tag: String,
}

impl MentionHandler {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn username(&self) -> &str {
        self.tag.strip_prefix('@').unwrap_or(&self.tag)
    }

    pub(super) fn on_click(&self, ctx: &mut dyn ClickContext) {
        ctx.open_peer_by_name(self.username(), ShowAt::Profile);
    }

    pub(super) fn to_entity(&self, offset: usize, text_part: &str) -> EntityInText {
        EntityInText::new(EntityKind::Mention, offset, text_part.char_len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utilities::test_fixtures::{RecordingContext, Request};

    #[test]
    fn test_opens_profile() {
        let mut ctx = RecordingContext::default();
        MentionHandler::new("@johndoe").on_click(&mut ctx);
        assert_eq!(ctx.requests, [Request::OpenPeerByName("johndoe".into(), ShowAt::Profile)]);
    }

    #[test]
    fn test_username() {
        assert_eq!(MentionHandler::new("@johndoe").username(), "johndoe");
        assert_eq!(MentionHandler::new("johndoe").username(), "johndoe");
    }
}
