use crate::domain::storage::Storage;
use crate::error::{Result, SiteError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Clone)]
pub struct FileSystemStore {
    servers_dir: PathBuf,
    output_dir: PathBuf,
    readme_name: String,
}

impl FileSystemStore {
    pub fn new(
        servers_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        readme_name: impl Into<String>,
    ) -> Self {
        Self {
            servers_dir: servers_dir.into(),
            output_dir: output_dir.into(),
            readme_name: readme_name.into(),
        }
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            info!("Created directory {:?}", dir);
        }
        Ok(())
    }

    /// Names of the immediate subdirectories of `dir`, in enumeration order.
    /// A name that is not valid UTF-8 is an error.
    fn read_subdirs(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().into_string().map_err(|_| {
                SiteError::Other(format!(
                    "directory name is not valid UTF-8: {:?}",
                    entry.path()
                ))
            })?;
            names.push(name);
        }
        Ok(names)
    }
}

impl Storage for FileSystemStore {
    fn list_games(&self) -> Result<Vec<String>> {
        self.read_subdirs(&self.servers_dir)
    }

    fn list_servers(&self, game: &str) -> Result<Vec<String>> {
        self.read_subdirs(&self.servers_dir.join(game))
    }

    fn load_readme(&self, game: &str, server: &str) -> Result<Option<String>> {
        let path = self
            .servers_dir
            .join(game)
            .join(server)
            .join(&self.readme_name);
        if path.is_file() {
            let bytes = fs::read(&path)?;
            let readme = match String::from_utf8(bytes) {
                Ok(readme) => readme,
                Err(e) => {
                    warn!("{:?} is not valid UTF-8, replacing invalid bytes", path);
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            Ok(Some(readme))
        } else {
            Ok(None)
        }
    }

    fn save_output(&self, name: &str, content: &str) -> Result<()> {
        self.ensure_dir(&self.output_dir)?;
        let path = self.output_path(name);
        fs::write(&path, content)?;
        info!("Wrote {:?}", path);
        Ok(())
    }
}
