use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LangKey {
    ContextCopyLink,
    ContextCopyEmail,
    ContextCopyMention,
    ContextCopyHashtag,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub copy_link: String,
    pub copy_email: String,
    pub copy_mention: String,
    pub copy_hashtag: String,
}

impl Labels {
    pub fn get(&self, key: LangKey) -> &str {
        match key {
            LangKey::ContextCopyLink => &self.copy_link,
            LangKey::ContextCopyEmail => &self.copy_email,
            LangKey::ContextCopyMention => &self.copy_mention,
            LangKey::ContextCopyHashtag => &self.copy_hashtag,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            copy_link: "Copy link".into(),
            copy_email: "Copy email".into(),
            copy_mention: "Copy username".into(),
            copy_hashtag: "Copy hashtag".into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = Labels::default();
        assert_eq!(labels.get(LangKey::ContextCopyLink), "Copy link");
        assert_eq!(labels.get(LangKey::ContextCopyEmail), "Copy email");
        assert_eq!(labels.get(LangKey::ContextCopyMention), "Copy username");
        assert_eq!(labels.get(LangKey::ContextCopyHashtag), "Copy hashtag");
    }

    #[test]
    fn test_override_label() {
        let labels = Labels { copy_link: "Kopiuj link".into(), ..Labels::default() };
        assert_eq!(labels.get(LangKey::ContextCopyLink), "Kopiuj link");
        assert_eq!(labels.get(LangKey::ContextCopyHashtag), "Copy hashtag");
    }
}
