use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Repository root containing the `servers/` directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory the generated site is written to
    #[arg(long, default_value = "public")]
    pub output_dir: PathBuf,

    /// Path to the optional site configuration file
    #[arg(long, default_value = "site_config.json")]
    pub config_file: PathBuf,

    /// Repository URL relative README links are rewritten against
    #[arg(long, env = "SERVER_INDEX_REPO_URL")]
    pub repo_url: Option<String>,

    /// Branch used in rewritten links
    #[arg(long)]
    pub branch: Option<String>,

    /// Markdown rendering policy
    #[arg(long, value_enum, default_value_t = MarkdownPolicy::Minimal)]
    pub markdown: MarkdownPolicy,

    /// Sort games and servers by name instead of directory order
    #[arg(long)]
    pub sort: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Render the full index page to `<output-dir>/index.html`
    Build,
    /// Write the index as a data module rendered in the browser
    Export,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkdownPolicy {
    /// Small regex converter: headers, quotes, bold, code, links, lists
    #[default]
    Minimal,
    /// GitHub flavoured Markdown via pulldown-cmark
    Gfm,
}
