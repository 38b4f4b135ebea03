use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;

/// Port over the single persistence slot holding the serialized canonical
/// résumé. Absence of the slot means "no prior data". Writes fully overwrite
/// the slot; the discipline is last-writer-wins.
pub trait StorePort {
    fn get(&self) -> Result<Option<String>>;
    fn set(&mut self, payload: &str) -> Result<()>;
    fn remove(&mut self) -> Result<()>;
}

/// In-process slot, used when embedding the session and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl StorePort for MemoryStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn set(&mut self, payload: &str) -> Result<()> {
        self.slot = Some(payload.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

/// Slot persisted as a single file on disk, used by the CLI. A missing file
/// reads as an absent slot, and removing an already-absent slot succeeds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorePort for FileStore {
    fn get(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, payload: &str) -> Result<()> {
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
