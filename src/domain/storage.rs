use crate::error::Result;

/// Read side of the `servers/<game>/<server>/README` tree plus the output sink.
pub trait Storage {
    fn list_games(&self) -> Result<Vec<String>>;
    fn list_servers(&self, game: &str) -> Result<Vec<String>>;
    /// `Ok(None)` when the server directory has no README.
    fn load_readme(&self, game: &str, server: &str) -> Result<Option<String>>;
    fn save_output(&self, name: &str, content: &str) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const INDEX_PAGE: &'static str = "index.html";
    pub const DATA_MODULE: &'static str = "server-index.js";
    pub const RENDER_SCRIPT: &'static str = "render-index.js";
}
