use std::error::Error;
use std::fmt;

use url::Url;

use crate::url_normalizer;

/// An in-app action addressed by a `tg://` link.
#[derive(Debug, PartialEq, Eq)]
pub enum LocalUrl {
    Join { invite: String },
    AddStickers { set: String },
    MsgUrl { url: String, text: Option<String> },
    Resolve { domain: String, post: Option<i32>, params: Vec<(String, String)> },
}

#[derive(Debug, PartialEq, Eq)]
pub enum LocalUrlError {
    NotLocal,
    Malformed(url::ParseError),
    UnknownAction(String),
    MissingParameter(&'static str),
}

impl fmt::Display for LocalUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLocal => write!(f, "not a {} link", url_normalizer::LOCAL_SCHEME),
            Self::Malformed(err) => write!(f, "malformed link: {err}"),
            Self::UnknownAction(action) => write!(f, "unknown link action {action:?}"),
            Self::MissingParameter(key) => write!(f, "missing {key:?} link parameter"),
        }
    }
}

impl Error for LocalUrlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

fn take(params: &mut Vec<(String, String)>, key: &str) -> Option<String> {
    let index = params.iter().position(|(name, _)| name == key)?;
    Some(params.remove(index).1)
}

fn require(params: &mut Vec<(String, String)>, key: &'static str) -> Result<String, LocalUrlError> {
    take(params, key).ok_or(LocalUrlError::MissingParameter(key))
}

impl LocalUrl {
    pub fn parse(link: &str) -> Result<Self, LocalUrlError> {
        if !url_normalizer::is_local(link) {
            return Err(LocalUrlError::NotLocal);
        }

        let url = Url::parse(link).map_err(LocalUrlError::Malformed)?;
        let action = url.host_str().unwrap_or_default().to_ascii_lowercase();
        let mut params = url.query_pairs().into_owned().collect::<Vec<_>>();

        match action.as_str() {
            "join" => Ok(Self::Join { invite: require(&mut params, "invite")? }),
            "addstickers" => Ok(Self::AddStickers { set: require(&mut params, "set")? }),
            "msg_url" => Ok(Self::MsgUrl {
                url: require(&mut params, "url")?,
                text: take(&mut params, "text"),
            }),
            "resolve" => {
                let domain = require(&mut params, "domain")?;
                // a jump target that doesn't fit stays among the plain parameters
                let post = params.iter().position(|(name, _)| name == "post").and_then(|index| {
                    let post = params[index].1.parse().ok()?;
                    params.remove(index);
                    Some(post)
                });
                Ok(Self::Resolve { domain, post, params })
            }
            _ => Err(LocalUrlError::UnknownAction(action)),
        }
    }
}

impl fmt::Display for LocalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Join { invite } => write!(f, "join chat with invite {invite:?}"),
            Self::AddStickers { set } => write!(f, "add sticker set {set:?}"),
            Self::MsgUrl { url, text } => {
                write!(f, "share {url:?}")?;
                if let Some(text) = text {
                    write!(f, " with text {text:?}")?;
                }
                Ok(())
            }
            Self::Resolve { domain, post, params } => {
                write!(f, "open @{domain}")?;
                if let Some(post) = post {
                    write!(f, " at post {post}")?;
                }
                for (key, value) in params {
                    write!(f, " {key}={value:?}")?;
                }
                Ok(())
            }
        }
    }
}
