//! Keyed JSON blob persistence.
//!
//! One file per key, each holding a JSON-encoded collection (or a
//! single object for the session). Every read fully deserializes and
//! every write fully reserializes the affected blob — acceptable at
//! master-data scale.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DbError;

pub(crate) const PROJECTS: &str = "projects";
pub(crate) const CUSTOMERS: &str = "customers";
pub(crate) const EMPLOYEES: &str = "employees";
pub(crate) const SESSION: &str = "session";

#[derive(Debug, Clone)]
pub(crate) struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, DbError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path(key).exists()
    }

    /// Read a collection blob. An absent blob is an empty collection.
    pub fn read_vec<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DbError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_vec<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), DbError> {
        let raw = serde_json::to_string(items)?;
        fs::write(self.path(key), raw)?;
        Ok(())
    }

    /// Read a single-object blob, if present.
    pub fn read_one<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DbError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn write_one<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DbError> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.path(key), raw)?;
        Ok(())
    }

    /// Remove a blob. Removing an absent blob is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), DbError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
