use crate::domain::Index;
use crate::error::Result;
use crate::services::links::LinkRewriter;
use crate::services::markdown::MarkdownRenderer;
use crate::templates::{GameView, IndexPage, ServerView};
use askama::Template;
use tracing::debug;

/// Turns a built index into the complete pre-rendered page.
pub struct PageAssembler {
    rewriter: LinkRewriter,
    renderer: Box<dyn MarkdownRenderer>,
    title: String,
}

impl PageAssembler {
    pub fn new(
        rewriter: LinkRewriter,
        renderer: Box<dyn MarkdownRenderer>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            rewriter,
            renderer,
            title: title.into(),
        }
    }

    fn game_views(&self, index: &Index) -> Vec<GameView> {
        index
            .games
            .iter()
            .map(|game| GameView {
                name: game.name.clone(),
                servers: game
                    .servers
                    .iter()
                    .map(|server| {
                        debug!("Rendering {}/{}", game.name, server.name);
                        let markdown =
                            self.rewriter
                                .rewrite(&server.readme, &game.name, &server.name);
                        ServerView {
                            name: server.name.clone(),
                            html: self.renderer.render(&markdown),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn assemble(&self, index: &Index) -> Result<String> {
        let page = IndexPage {
            title: &self.title,
            games: self.game_views(index),
            generated_date: index.generated_date.format("%Y-%m-%d").to_string(),
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameGroup, ServerEntry};
    use crate::services::markdown::{GfmMarkdown, MinimalMarkdown};
    use chrono::NaiveDate;

    fn index(date: NaiveDate) -> Index {
        Index::new(
            vec![GameGroup {
                name: "Chess".to_string(),
                servers: vec![ServerEntry {
                    name: "alpha".to_string(),
                    readme: "# Hi\n\nSee [rules](./RULES.md).".to_string(),
                }],
            }],
            date,
        )
    }

    fn assembler() -> PageAssembler {
        PageAssembler::new(
            LinkRewriter::new("https://example.com/repo", "main"),
            Box::new(MinimalMarkdown),
            "Servers Index",
        )
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn renders_nested_sections_with_rewritten_links() {
        let html = assembler().assemble(&index(date(1))).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<details class="game">"#));
        assert!(html.contains("<summary>Chess</summary>"));
        assert!(html.contains("<summary>alpha</summary>"));
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains(
            r#"<a href="https://example.com/repo/tree/main/servers/Chess/alpha/RULES.md">rules</a>"#
        ));
        assert!(html.contains("Generated on 2024-05-01"));
    }

    #[test]
    fn identical_inputs_give_identical_pages() {
        let first = assembler().assemble(&index(date(1))).unwrap();
        let second = assembler().assemble(&index(date(1))).unwrap();
        assert_eq!(first, second);

        let later = assembler().assemble(&index(date(2))).unwrap();
        assert_eq!(
            first.replace("2024-05-01", "2024-05-02"),
            later,
            "only the date differs"
        );
    }

    #[test]
    fn names_are_escaped_but_readme_html_is_not() {
        let mut index = index(date(1));
        index.games[0].name = "Tom & Jerry".to_string();
        let html = assembler().assemble(&index).unwrap();

        assert!(html.contains("<summary>Tom &amp; Jerry</summary>"));
        assert!(html.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn gfm_renderer_plugs_in() {
        let assembler = PageAssembler::new(
            LinkRewriter::new("https://example.com/repo", "main"),
            Box::new(GfmMarkdown::default()),
            "Servers Index",
        );
        let html = assembler.assemble(&index(date(1))).unwrap();
        assert!(html.contains(
            r#"<a href="https://example.com/repo/tree/main/servers/Chess/alpha/RULES.md">rules</a>"#
        ));
    }

    #[test]
    fn empty_index_still_renders_chrome() {
        let html = assembler()
            .assemble(&Index::new(Vec::new(), date(1)))
            .unwrap();
        assert!(html.contains("<h1>Game Servers</h1>"));
        assert!(!html.contains("<details"));
    }
}
