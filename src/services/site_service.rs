use crate::config::{Commands, Config};
use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::Index;
use crate::error::Result;
use crate::services::{
    export::ExportService, indexing::IndexService, links::LinkRewriter, markdown::renderer_for,
    page::PageAssembler,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

pub struct SiteService {
    config: Config,
    store: Arc<dyn Storage>,
    indexing: IndexService,
}

impl SiteService {
    pub fn new(config: Config, store: Arc<dyn Storage + 'static>) -> Self {
        let indexing = IndexService::new(store.clone());
        Self {
            config,
            store,
            indexing,
        }
    }

    fn rewriter(&self) -> LinkRewriter {
        LinkRewriter::new(&self.config.site.repository_url, &self.config.site.branch)
    }

    pub fn run(&self) -> Result<Index> {
        self.run_on(Utc::now().date_naive())
    }

    /// Builds the index dated `today` and emits it according to the command.
    pub fn run_on(&self, today: NaiveDate) -> Result<Index> {
        self.config.ensure_directories()?;

        let mut index = self.indexing.build(today)?;
        if self.config.args.sort {
            index.sort();
        }

        match self.config.command() {
            Commands::Build => self.build_page(&index)?,
            Commands::Export => self.export(&index)?,
        }

        info!("Total games: {}", index.games.len());
        info!("Total servers indexed: {}", index.total_servers());
        Ok(index)
    }

    fn build_page(&self, index: &Index) -> Result<()> {
        let assembler = PageAssembler::new(
            self.rewriter(),
            renderer_for(self.config.args.markdown),
            &self.config.site.title,
        );
        let html = assembler.assemble(index)?;
        self.store.save_output(StorageKeys::INDEX_PAGE, &html)
    }

    fn export(&self, index: &Index) -> Result<()> {
        ExportService::new(self.store.clone(), self.rewriter(), &self.config.site.title)
            .export(index)
    }
}
