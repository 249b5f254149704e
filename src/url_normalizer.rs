use std::borrow::Cow;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};

pub const LOCAL_SCHEME: &str = "tg://";

/// Everything except RFC 3986 unreserved characters.
const URL_COMPONENT: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

struct Rule {
    name: &'static str,
    pattern: Regex,
    rewrite: fn(&str, &Captures) -> String,
}

// first match wins
static RULES: LazyLock<[Rule; 4]> = LazyLock::new(|| {
    [
        Rule {
            name: "join",
            pattern: Regex::new(r"^(?i:https?://telegram\.me)/joinchat/([a-zA-Z0-9._\-]+)(?:\?|$)")
                .unwrap(),
            rewrite: rewrite_join,
        },
        Rule {
            name: "addstickers",
            pattern: Regex::new(r"^(?i:https?://telegram\.me)/addstickers/([a-zA-Z0-9._]+)(?:\?|$)")
                .unwrap(),
            rewrite: rewrite_add_stickers,
        },
        Rule {
            name: "msg_url",
            pattern: Regex::new(r"^(?i:https?://telegram\.me)/share/url\?(.+)$").unwrap(),
            rewrite: rewrite_share_url,
        },
        Rule {
            name: "resolve",
            pattern: Regex::new(
                r"^(?i:https?://telegram\.me)/([a-zA-Z0-9._]+)(?:/?\?|/?$|/(\d+)/?(?:\?|$))",
            )
            .unwrap(),
            rewrite: rewrite_resolve,
        },
    ]
});

fn encode(component: &str) -> String {
    utf8_percent_encode(component, URL_COMPONENT).to_string()
}

fn rewrite_join(_: &str, captures: &Captures) -> String {
    format!("{LOCAL_SCHEME}join?invite={}", encode(&captures[1]))
}

fn rewrite_add_stickers(_: &str, captures: &Captures) -> String {
    format!("{LOCAL_SCHEME}addstickers?set={}", encode(&captures[1]))
}

fn rewrite_share_url(_: &str, captures: &Captures) -> String {
    format!("{LOCAL_SCHEME}msg_url?{}", &captures[1])
}

fn rewrite_resolve(url: &str, captures: &Captures) -> String {
    let mut local = format!("{LOCAL_SCHEME}resolve/?domain={}", encode(&captures[1]));

    if let Some(post) = captures.get(2) {
        local.push_str("&post=");
        local.push_str(post.as_str());
    }

    let params = &url[captures[0].len()..];
    if !params.is_empty() {
        local.push('&');
        local.push_str(params);
    }

    local
}

/// Rewrites a known `telegram.me` link into its `tg://` form. Anything else,
/// email addresses included, is returned unchanged.
pub fn normalize(url: &str) -> Cow<'_, str> {
    if is_email(url) {
        return Cow::Borrowed(url);
    }

    for rule in RULES.iter() {
        if let Some(captures) = rule.pattern.captures(url) {
            let local = (rule.rewrite)(url, &captures);
            log::debug!("rewrote {url:?} as {} link {local:?}", rule.name);
            return Cow::Owned(local);
        }
    }

    Cow::Borrowed(url)
}

pub fn is_email(url: &str) -> bool {
    url.find('@').is_some_and(|at| at > 0 && url.find('/').is_none_or(|slash| slash > at))
}

pub fn is_local(url: &str) -> bool {
    url.get(..LOCAL_SCHEME.len()).is_some_and(|scheme| scheme.eq_ignore_ascii_case(LOCAL_SCHEME))
}

#[cfg(test)]
mod test {
    use super::*;

    const RECOGNIZED: [&str; 9] = [
        "https://telegram.me/joinchat/AbC123",
        "http://telegram.me/joinchat/AbC-1.2_3?utm=x",
        "https://telegram.me/addstickers/Cats",
        "https://telegram.me/share/url?url=https%3A%2F%2Fexample.com&text=hi",
        "https://telegram.me/johndoe",
        "https://telegram.me/johndoe/",
        "https://telegram.me/johndoe?start=abc",
        "https://telegram.me/johndoe/5?x=1",
        "HTTPS://Telegram.ME/durov/42/",
    ];

    #[test]
    fn test_join() {
        assert_eq!(normalize("https://telegram.me/joinchat/AbC123"), "tg://join?invite=AbC123");
        assert_eq!(
            normalize("http://telegram.me/joinchat/AbC-1.2_3?utm=x"),
            "tg://join?invite=AbC-1.2_3"
        );
    }

    #[test]
    fn test_add_stickers() {
        assert_eq!(normalize("https://telegram.me/addstickers/Cats"), "tg://addstickers?set=Cats");
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            normalize("https://telegram.me/share/url?url=https%3A%2F%2Fexample.com&text=hi"),
            "tg://msg_url?url=https%3A%2F%2Fexample.com&text=hi"
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(normalize("https://telegram.me/johndoe"), "tg://resolve/?domain=johndoe");
        assert_eq!(normalize("https://telegram.me/johndoe/"), "tg://resolve/?domain=johndoe");
        assert_eq!(
            normalize("https://telegram.me/johndoe?start=abc"),
            "tg://resolve/?domain=johndoe&start=abc"
        );
        assert_eq!(
            normalize("https://telegram.me/johndoe/5?x=1"),
            "tg://resolve/?domain=johndoe&post=5&x=1"
        );
        assert_eq!(
            normalize("https://telegram.me/johndoe/5"),
            "tg://resolve/?domain=johndoe&post=5"
        );
    }

    #[test]
    fn test_case_insensitive_host_only() {
        assert_eq!(
            normalize("HTTPS://Telegram.ME/durov/42/"),
            "tg://resolve/?domain=durov&post=42"
        );
        // the action path segment itself is case-sensitive
        assert_eq!(
            normalize("https://TELEGRAM.me/JoinChat/AbC123"),
            "https://TELEGRAM.me/JoinChat/AbC123"
        );
    }

    #[test]
    fn test_priority() {
        // "joinchat" and "addstickers" also fit the user link shape
        assert!(normalize("https://telegram.me/joinchat/x").starts_with("tg://join?"));
        assert!(normalize("https://telegram.me/addstickers/x").starts_with("tg://addstickers?"));
        assert!(normalize("https://telegram.me/share/url?url=x").starts_with("tg://msg_url?"));
    }

    #[test]
    fn test_unrecognized() {
        for url in [
            "https://example.com/joinchat/AbC123",
            "https://telegram.me/johndoe/posts",
            "https://telegram.me/share/url",
            "ftp://telegram.me/johndoe",
            "telegram.me/johndoe",
            "tg://resolve/?domain=johndoe",
            "",
        ] {
            assert_eq!(normalize(url), url);
        }
    }

    #[test]
    fn test_email_untouched() {
        assert_eq!(normalize("johndoe@telegram.me"), "johndoe@telegram.me");
    }

    #[test]
    fn test_idempotent() {
        for url in RECOGNIZED {
            let once = normalize(url).into_owned();
            assert!(is_local(&once), "{url} was not rewritten");
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("AbC-1.2_3~"), "AbC-1.2_3~");
        assert_eq!(encode("a b/ü"), "a%20b%2F%C3%BC");
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("john@example.com"));
        assert!(is_email("john@example.com/path"));
        assert!(!is_email("@john"));
        assert!(!is_email("https://example.com/@john"));
        assert!(!is_email("example.com"));
    }

    #[test]
    fn test_is_local() {
        assert!(is_local("tg://join?invite=x"));
        assert!(is_local("TG://join?invite=x"));
        assert!(!is_local("tg:/join"));
        assert!(!is_local("https://tg://"));
        assert!(!is_local("tg"));
    }
}
