use crate::config::MarkdownPolicy;
use crate::services::links::INLINE_LINK;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

pub fn renderer_for(policy: MarkdownPolicy) -> Box<dyn MarkdownRenderer> {
    match policy {
        MarkdownPolicy::Minimal => Box::new(MinimalMarkdown),
        MarkdownPolicy::Gfm => Box::new(GfmMarkdown::default()),
    }
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("valid markdown pattern")
}

static MARKDOWN_FENCE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^```markdown\n?"));
static CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^```\n?$"));
static H3: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^### (.+)$"));
static H2: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^## (.+)$"));
static H1: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^# (.+)$"));
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^> (.+)$"));
static BOLD: Lazy<Regex> = Lazy::new(|| pattern(r"\*\*(.+?)\*\*"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| pattern(r"`([^`]+)`"));
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^- (.+)$"));
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^[0-9]+\. (.+)$"));
static ITEM_RUN: Lazy<Regex> = Lazy::new(|| pattern(r"((?:<li>.*</li>\n?)+)"));

const BLOCK_PREFIXES: [&str; 3] = ["<h", "<ul", "<blockquote"];

/// Line-oriented regex converter. Handles headers up to `###`, blockquotes,
/// bold, inline code, links and flat lists. Nothing is escaped, and tables,
/// nested lists and fenced code are not understood.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalMarkdown;

impl MinimalMarkdown {
    fn wrap_paragraphs(text: &str) -> String {
        text.split("\n\n")
            .map(|block| {
                let block = block.trim();
                if !block.is_empty() && !BLOCK_PREFIXES.iter().any(|tag| block.starts_with(tag))
                {
                    format!("<p>{block}</p>")
                } else {
                    block.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MarkdownRenderer for MinimalMarkdown {
    fn render(&self, markdown: &str) -> String {
        let text = markdown.replace("\r\n", "\n");

        // Block constructs first, inline ones after, lists merged last
        let text = MARKDOWN_FENCE.replace_all(&text, "");
        let text = CLOSING_FENCE.replace_all(&text, "");
        let text = H3.replace_all(&text, "<h3>${1}</h3>");
        let text = H2.replace_all(&text, "<h2>${1}</h2>");
        let text = H1.replace_all(&text, "<h1>${1}</h1>");
        let text = BLOCKQUOTE.replace_all(&text, "<blockquote>${1}</blockquote>");
        let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
        let text = INLINE_CODE.replace_all(&text, "<code>${1}</code>");
        let text = INLINE_LINK.replace_all(&text, r#"<a href="${2}">${1}</a>"#);
        let text = UNORDERED_ITEM.replace_all(&text, "<li>${1}</li>");
        let text = ORDERED_ITEM.replace_all(&text, "<li>${1}</li>");
        let text = ITEM_RUN.replace_all(&text, "<ul>${1}</ul>");

        Self::wrap_paragraphs(&text)
    }
}

/// GitHub flavoured Markdown through pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct GfmMarkdown {
    options: Options,
}

impl Default for GfmMarkdown {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_GFM);
        Self { options }
    }
}

impl MarkdownRenderer for GfmMarkdown {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}
