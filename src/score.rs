use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

pub const DEFAULT_RECORD_FILE: &str = "record.txt";
pub const DEFAULT_RECORD: usize = 1;

/// Persists the longest snake ever reached as a bare decimal number in a text file.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable file counts as no record at all.
    pub fn read_record(&self) -> usize {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return DEFAULT_RECORD,
        };

        match content.trim().parse() {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring malformed record in {}: {}", self.path.display(), e);
                DEFAULT_RECORD
            }
        }
    }

    pub fn save_record(&self, record: usize) -> Result<()> {
        fs::write(&self.path, record.to_string())
            .with_context(|| format!("Error saving record to {}", self.path.display()))
    }
}
