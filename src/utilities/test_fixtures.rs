use crate::click_context::{ClickContext, Peer, ShowAt};

#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    OpenUrl(String),
    OpenFile(String),
    OpenLocalUrl(String),
    ConfirmLink(String),
    OpenPeerByName(String, ShowAt),
    SearchByHashtag(String, Option<Peer>),
    ShowPeerHistory(Peer, ShowAt),
    SendBotCommand(Peer, Option<Peer>, String),
    InsertBotCommand(String),
}

#[derive(Default)]
pub struct RecordingContext {
    pub requests: Vec<Request>,
    pub peer: Option<Peer>,
    pub hovered_author: Option<Peer>,
    pub refuse_urls: bool,
}

impl RecordingContext {
    pub fn with_peer(id: i64, is_user: bool) -> Self {
        Self { peer: Some(Peer { id, is_user }), ..Self::default() }
    }
}

impl ClickContext for RecordingContext {
    fn open_url(&mut self, url: &str) -> bool {
        self.requests.push(Request::OpenUrl(url.into()));
        !self.refuse_urls
    }

    fn open_file(&mut self, path: &str) {
        self.requests.push(Request::OpenFile(path.into()));
    }

    fn open_local_url(&mut self, url: &str) {
        self.requests.push(Request::OpenLocalUrl(url.into()));
    }

    fn confirm_link(&mut self, url: &str) {
        self.requests.push(Request::ConfirmLink(url.into()));
    }

    fn open_peer_by_name(&mut self, username: &str, show_at: ShowAt) {
        self.requests.push(Request::OpenPeerByName(username.into(), show_at));
    }

    fn search_by_hashtag(&mut self, tag: &str, peer: Option<Peer>) {
        self.requests.push(Request::SearchByHashtag(tag.into(), peer));
    }

    fn show_peer_history(&mut self, peer: Peer, show_at: ShowAt) {
        self.requests.push(Request::ShowPeerHistory(peer, show_at));
    }

    fn send_bot_command(&mut self, peer: Peer, bot: Option<Peer>, command: &str) {
        self.requests.push(Request::SendBotCommand(peer, bot, command.into()));
    }

    fn insert_bot_command(&mut self, command: &str) {
        self.requests.push(Request::InsertBotCommand(command.into()));
    }

    fn peer_for_mouse_action(&self) -> Option<Peer> {
        self.peer
    }

    fn hovered_item_author(&self) -> Option<Peer> {
        self.hovered_author
    }
}
