use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Only the primary and auxiliary buttons activate a link.
    pub const fn activates(self) -> bool {
        matches!(self, Self::Left | Self::Middle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowAt {
    Profile,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peer {
    pub id: i64,
    pub is_user: bool,
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_user { write!(f, "user {}", self.id) } else { write!(f, "chat {}", self.id) }
    }
}

/// Services a click can reach. Every call is a request that the application
/// carries out on its own; nothing here waits for the outcome.
pub trait ClickContext {
    /// Asks the platform to open `url`. Returns `false` when no handler took it.
    fn open_url(&mut self, url: &str) -> bool;
    fn open_file(&mut self, path: &str);
    fn open_local_url(&mut self, url: &str);
    /// Shows a confirmation before leaving the app. On acceptance the application
    /// opens the link with [`crate::click_handler::UrlHandler::open_url`].
    fn confirm_link(&mut self, url: &str);
    fn open_peer_by_name(&mut self, username: &str, show_at: ShowAt);
    fn search_by_hashtag(&mut self, tag: &str, peer: Option<Peer>);
    fn show_peer_history(&mut self, peer: Peer, show_at: ShowAt);
    fn send_bot_command(&mut self, peer: Peer, bot: Option<Peer>, command: &str);
    fn insert_bot_command(&mut self, command: &str);
    fn peer_for_mouse_action(&self) -> Option<Peer>;
    fn hovered_item_author(&self) -> Option<Peer>;
}
