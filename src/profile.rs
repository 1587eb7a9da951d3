//! Persisted player profile: a handful of string slots keyed by name.
//!
//! Only the lobby reads and writes it; the games never see the store.

use crate::error::ProfileError;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const USER_NAME_KEY: &str = "user_name";

pub trait ProfileStore
{
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ProfileError>;
    fn remove(&mut self, key: &str) -> Result<(), ProfileError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore
{
    entries: BTreeMap<String, String>,
}

impl MemoryStore
{
    pub fn new() -> Self
    {
        Self::default()
    }
}

impl ProfileStore for MemoryStore
{
    fn get(&self, key: &str) -> Option<String>
    {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ProfileError>
    {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ProfileError>
    {
        self.entries.remove(key);
        Ok(())
    }
}

/// TOML-backed store. Every change rewrites the whole file.
#[derive(Debug)]
pub struct FileStore
{
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore
{
    /// Loads `path`, treating a missing file as an empty profile.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProfileError>
    {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ProfileError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(ProfileError::Read { path, source }),
        };
        debug!(path = %path.display(), slots = entries.len(), "profile loaded");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path
    {
        &self.path
    }

    fn save(&self) -> Result<(), ProfileError>
    {
        let text = toml::to_string(&self.entries)?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ProfileError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, text).map_err(|source| ProfileError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "profile saved");
        Ok(())
    }
}

impl ProfileStore for FileStore
{
    fn get(&self, key: &str) -> Option<String>
    {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ProfileError>
    {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<(), ProfileError>
    {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.save()
    }
}
