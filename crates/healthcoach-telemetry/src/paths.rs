//! Path resolution for health coach data files

use std::path::PathBuf;

/// Resolves standard paths for stored health memory and configuration
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Create a resolver rooted at `~/.healthcoach`
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            data_dir: home.join(".healthcoach"),
        })
    }

    /// Create a resolver rooted at an explicit directory
    pub fn with_root(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get compressed_memory.json path
    pub fn memory_file(&self) -> PathBuf {
        self.data_dir.join("compressed_memory.json")
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }
}
