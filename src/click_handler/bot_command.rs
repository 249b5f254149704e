use crate::click_context::{ClickContext, ShowAt};
use crate::entity::{EntityInText, EntityKind};
use crate::utilities::text_utils::CharLen;

/// A `/command` token, optionally addressed with an `@botname` suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotCommandHandler {
    pub(super) cmd: String,
}

impl BotCommandHandler {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into() }
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    pub(super) fn on_click(&self, ctx: &mut dyn ClickContext) {
        let Some(peer) = ctx.peer_for_mouse_action() else {
            ctx.insert_bot_command(&self.cmd);
            return;
        };

        let bot = if peer.is_user {
            Some(peer)
        } else {
            ctx.hovered_item_author().filter(|author| author.is_user)
        };

        ctx.show_peer_history(peer, ShowAt::End);
        ctx.send_bot_command(peer, bot, &self.cmd);
    }

    pub(super) fn to_entity(&self, offset: usize, text_part: &str) -> EntityInText {
        EntityInText::new(EntityKind::BotCommand, offset, text_part.char_len())
    }
}
