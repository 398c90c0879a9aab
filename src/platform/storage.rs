//! Key-value storage backends for saved games

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::persistence::Record;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Stored record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere a single record can be kept between runs
pub trait PrefStore {
    /// Read the stored record. An empty store yields an empty record.
    fn load(&self) -> Result<Record, StoreError>;

    /// Replace the stored record
    fn save(&mut self, record: &Record) -> Result<(), StoreError>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Record,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

impl PrefStore for MemoryStore {
    fn load(&self) -> Result<Record, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &Record) -> Result<(), StoreError> {
        self.record = record.clone();
        Ok(())
    }
}

/// A JSON file on disk
///
/// Writes go to a `.tmp` sibling first and are renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PrefStore for JsonFileStore {
    fn load(&self) -> Result<Record, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Record::from_json(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Record::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, record: &Record) -> Result<(), StoreError> {
        let json = record.to_json()?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Saved {} keys to {}", record.len(), self.path.display());
        Ok(())
    }
}
