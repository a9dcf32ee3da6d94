use crate::config::cli::Args;
use crate::error::{Result, SiteError};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info};

pub(crate) mod cli;

pub use cli::{Commands, MarkdownPolicy};

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/UnnamedGroupHub/servers";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_README_NAME: &str = "README.md";
pub const SERVERS_DIR: &str = "servers";

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_readme_name() -> String {
    DEFAULT_README_NAME.to_string()
}

fn default_title() -> String {
    "Servers Index".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_readme_name")]
    pub readme_name: String,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            repository_url: default_repository_url(),
            branch: default_branch(),
            readme_name: default_readme_name(),
            title: default_title(),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub site: SiteConfig,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        // The config file is optional, defaults apply when it is absent
        let mut site = if args.config_file.exists() {
            info!("Loading site config from {:?}", args.config_file);
            serde_json::from_str(&std::fs::read_to_string(&args.config_file)?)?
        } else {
            debug!("No site config at {:?}, using defaults", args.config_file);
            SiteConfig::default()
        };

        if let Some(url) = &args.repo_url {
            site.repository_url = url.clone();
        }
        if let Some(branch) = &args.branch {
            site.branch = branch.clone();
        }

        site.repository_url = site.repository_url.trim_end_matches('/').to_string();
        if site.repository_url.is_empty() {
            return Err(SiteError::Config("repository_url must not be empty".into()));
        }
        if site.readme_name.is_empty() {
            return Err(SiteError::Config("readme_name must not be empty".into()));
        }

        Ok(Self { args, site })
    }

    pub fn command(&self) -> Commands {
        self.args.command.unwrap_or(Commands::Build)
    }

    pub fn servers_dir(&self) -> PathBuf {
        self.args.root.join(SERVERS_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.args.root.join(&self.args.output_dir)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        let output_dir = self.output_dir();
        if !output_dir.exists() {
            std::fs::create_dir_all(&output_dir)?;
            info!("Created output directory {:?}", output_dir);
        }
        Ok(())
    }
}
