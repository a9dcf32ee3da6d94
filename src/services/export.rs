use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::Index;
use crate::error::Result;
use crate::services::links::LinkRewriter;
use crate::templates::ClientShell;
use askama::Template;
use std::sync::Arc;
use tracing::info;

pub const RENDER_SCRIPT: &str = include_str!("../../assets/render-index.js");

/// Writes the client-rendered variant: a data module holding the index, the
/// browser render script and the shell page they fill in.
pub struct ExportService {
    store: Arc<dyn Storage>,
    rewriter: LinkRewriter,
    title: String,
}

impl ExportService {
    pub fn new(
        store: Arc<dyn Storage + 'static>,
        rewriter: LinkRewriter,
        title: impl Into<String>,
    ) -> Self {
        Self {
            store,
            rewriter,
            title: title.into(),
        }
    }

    pub fn data_module(&self, index: &Index) -> Result<String> {
        Ok(format!(
            "export const serverIndex = {};\nexport const repositoryUrl = {};\nexport const branch = {};\n",
            serde_json::to_string_pretty(index)?,
            serde_json::to_string(self.rewriter.repository_url())?,
            serde_json::to_string(self.rewriter.branch())?,
        ))
    }

    pub fn shell_page(&self) -> Result<String> {
        let shell = ClientShell {
            title: &self.title,
            render_script: StorageKeys::RENDER_SCRIPT,
        };
        Ok(shell.render()?)
    }

    pub fn export(&self, index: &Index) -> Result<()> {
        self.store
            .save_output(StorageKeys::DATA_MODULE, &self.data_module(index)?)?;
        self.store
            .save_output(StorageKeys::RENDER_SCRIPT, RENDER_SCRIPT)?;
        self.store
            .save_output(StorageKeys::INDEX_PAGE, &self.shell_page()?)?;

        info!("Exported {} games for client rendering", index.games.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameGroup, ServerEntry};
    use crate::infrastructure::FileSystemStore;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn index() -> Index {
        Index::new(
            vec![GameGroup {
                name: "Chess".to_string(),
                servers: vec![ServerEntry {
                    name: "alpha".to_string(),
                    readme: "# Hi".to_string(),
                }],
            }],
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    fn service(dir: &TempDir) -> ExportService {
        let store = FileSystemStore::new(
            dir.path().join("servers"),
            dir.path().join("public"),
            "README.md",
        );
        ExportService::new(
            Arc::new(store),
            LinkRewriter::new("https://example.com/repo", "main"),
            "Servers Index",
        )
    }

    #[test]
    fn data_module_embeds_index_json() {
        let dir = TempDir::new().unwrap();
        let module = service(&dir).data_module(&index()).unwrap();

        let json = module
            .strip_prefix("export const serverIndex = ")
            .and_then(|rest| rest.split(";\n").next())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();

        assert_eq!(value["generatedDate"], "2024-05-01");
        assert_eq!(value["games"][0]["servers"][0]["readme"], "# Hi");
        assert!(module.contains(r#"export const repositoryUrl = "https://example.com/repo";"#));
        assert!(module.contains(r#"export const branch = "main";"#));
    }

    #[test]
    fn shell_page_has_injection_targets() {
        let dir = TempDir::new().unwrap();
        let page = service(&dir).shell_page().unwrap();

        assert!(page.contains(r#"<span id="generated-date"></span>"#));
        assert!(page.contains(r#"<div id="content"></div>"#));
        assert!(page.contains(r#"src="render-index.js""#));
    }

    #[test]
    fn export_writes_all_files() {
        let dir = TempDir::new().unwrap();
        service(&dir).export(&index()).unwrap();

        let public = dir.path().join("public");
        assert!(public.join("index.html").is_file());
        assert!(public.join("server-index.js").is_file());
        let script = fs::read_to_string(public.join("render-index.js")).unwrap();
        assert!(script.contains("generated-date"));
    }
}
