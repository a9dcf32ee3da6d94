use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};

/// Single-level inline link, `[text](url)`. Nested brackets are not supported.
pub static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

fn is_passthrough(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with('#')
}

/// Points relative README links at the repository browser.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    repository_url: String,
    branch: String,
}

impl LinkRewriter {
    pub fn new(repository_url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            branch: branch.into(),
        }
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    fn base_url(&self, game: &str, server: &str) -> String {
        format!(
            "{}/tree/{}/servers/{}/{}",
            self.repository_url,
            self.branch,
            encode_component(game),
            encode_component(server)
        )
    }

    pub fn rewrite(&self, markdown: &str, game: &str, server: &str) -> String {
        let base = self.base_url(game, server);

        INLINE_LINK
            .replace_all(markdown, |caps: &Captures<'_>| {
                let url = &caps[2];
                if is_passthrough(url) {
                    return caps[0].to_string();
                }
                let path = url.strip_prefix("./").unwrap_or(url);
                format!("[{}]({}/{})", &caps[1], base, path)
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO: &str = "https://github.com/UnnamedGroupHub/servers";

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new(REPO, "main")
    }

    #[test]
    fn absolute_and_anchor_links_are_untouched() {
        let markdown = "See [docs](https://example.com/x), [old](http://example.com) \
                        and [below](#setup).\n\n[again](https://example.com/a%20b)";
        assert_eq!(rewriter().rewrite(markdown, "Chess", "alpha"), markdown);
    }

    #[test]
    fn relative_link_points_at_repository_tree() {
        let out = rewriter().rewrite("[T](./sub/path.png)", "G", "S");
        assert_eq!(
            out,
            format!("[T]({REPO}/tree/main/servers/G/S/sub/path.png)")
        );
    }

    #[test]
    fn bare_relative_link_is_rewritten() {
        let out = rewriter().rewrite("[config](config.yml)", "G", "S");
        assert_eq!(out, format!("[config]({REPO}/tree/main/servers/G/S/config.yml)"));
    }

    #[test]
    fn only_one_leading_dot_slash_is_stripped() {
        let out = rewriter().rewrite("[x](././a)", "G", "S");
        assert_eq!(out, format!("[x]({REPO}/tree/main/servers/G/S/./a)"));
    }

    #[test]
    fn names_are_percent_encoded() {
        let out = rewriter().rewrite("[x](a.txt)", "Counter Strike", "eu/west#1");
        assert_eq!(
            out,
            format!("[x]({REPO}/tree/main/servers/Counter%20Strike/eu%2Fwest%231/a.txt)")
        );
    }

    #[test]
    fn encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("A-z_0.9!~*'()"), "A-z_0.9!~*'()");
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn malformed_and_nested_links_stay_literal() {
        let markdown = "[broken](no-close and [[nested]](x";
        assert_eq!(rewriter().rewrite(markdown, "G", "S"), markdown);
    }

    #[test]
    fn uses_configured_branch() {
        let out = LinkRewriter::new("https://example.com/r", "dev").rewrite("[a](b)", "G", "S");
        assert_eq!(out, "[a](https://example.com/r/tree/dev/servers/G/S/b)");
    }
}
