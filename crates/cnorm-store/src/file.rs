//! Durable alias store backed by a JSON file.
//!
//! # File Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "aliases": {
//!     "russia": { "priority": 1, "canonical": "Russia" },
//!     "moscow": { "priority": 2, "canonical": "Russia" }
//!   }
//! }
//! ```
//!
//! Mutations are held in memory and written back on [`FileAliasStore::flush`],
//! [`FileAliasStore::close`], or drop. Every write goes to a temp file that is
//! synced and then renamed over the target, so a crash never leaves a
//! half-written store behind.
//!
//! Two processes writing the same file is unsupported: the last flush wins.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use cnorm_model::AliasEntry;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::store::AliasStore;

/// Format version written by this release.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoreFileRef<'a> {
    version: u32,
    aliases: &'a BTreeMap<String, AliasEntry>,
}

#[derive(Deserialize)]
struct StoreHeader {
    version: u32,
}

#[derive(Deserialize)]
struct StoreFile {
    #[serde(default)]
    aliases: BTreeMap<String, AliasEntry>,
}

/// Alias store persisted at a filesystem path.
///
/// Opening the store acquires it for a session; [`close`](Self::close)
/// releases it and reports any write failure. If the store is dropped
/// without being closed, pending changes are flushed on a best-effort
/// basis and failures are logged.
#[derive(Debug)]
pub struct FileAliasStore {
    path: PathBuf,
    aliases: BTreeMap<String, AliasEntry>,
    dirty: bool,
}

impl FileAliasStore {
    /// Create a new empty store at `path`, replacing any existing file.
    ///
    /// Parent directories are created if needed.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let mut store = Self {
            path,
            aliases: BTreeMap::new(),
            dirty: true,
        };
        store.flush()?;
        tracing::info!("Created alias store at {}", store.path.display());
        Ok(store)
    }

    /// Open an existing store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::Missing { path });
            }
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };
        let aliases = parse_store(&contents, &path)?;
        tracing::info!(
            aliases = aliases.len(),
            "Opened alias store at {}",
            path.display()
        );
        Ok(Self {
            path,
            aliases,
            dirty: false,
        })
    }

    /// Open the store at `path`, creating an empty one if none exists.
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match Self::open(&path) {
            Err(StoreError::Missing { .. }) => Self::create(path),
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if there are changes not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write pending changes to disk. A no-op when nothing changed.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let payload = StoreFileRef {
            version: CURRENT_FORMAT_VERSION,
            aliases: &self.aliases,
        };
        let bytes = serde_json::to_vec_pretty(&payload)
            .map_err(|e| StoreError::Serialization { source: e })?;
        write_atomic(&self.path, &bytes)?;
        self.dirty = false;
        tracing::info!(
            aliases = self.aliases.len(),
            "Saved alias store to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Flush pending changes and release the store.
    pub fn close(mut self) -> Result<()> {
        self.flush()?;
        tracing::info!("Closed alias store at {}", self.path.display());
        Ok(())
    }
}

impl AliasStore for FileAliasStore {
    fn get(&self, key: &str) -> Option<&AliasEntry> {
        self.aliases.get(key)
    }

    fn set(&mut self, key: String, entry: AliasEntry) {
        self.aliases.insert(key, entry);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) -> Option<AliasEntry> {
        let removed = self.aliases.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.aliases.keys().map(String::as_str))
    }

    fn len(&self) -> usize {
        self.aliases.len()
    }
}

impl Drop for FileAliasStore {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(
                error = %e,
                "Discarding unsaved alias store changes for {}",
                self.path.display()
            );
        }
    }
}

/// Parse store contents and validate the format version.
fn parse_store(contents: &str, path: &Path) -> Result<BTreeMap<String, AliasEntry>> {
    let header: StoreHeader =
        serde_json::from_str(contents).map_err(|e| StoreError::InvalidFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if header.version > CURRENT_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: header.version,
            max_supported: CURRENT_FORMAT_VERSION,
            path: path.to_path_buf(),
        });
    }

    let file: StoreFile = serde_json::from_str(contents).map_err(|e| StoreError::InvalidFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(file.aliases)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `bytes` to a temp file next to `path`, sync it, then rename over `path`.
///
/// The temp file is removed if any step after its creation fails.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path(path);

    let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    let result = write_and_rename(&mut file, &temp_path, path, bytes);
    if result.is_err() {
        drop(file);
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(
                path = %temp_path.display(),
                error = %e,
                "Failed to remove temporary store file"
            );
        }
    }
    result
}

fn write_and_rename(file: &mut File, temp_path: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    file.write_all(bytes).map_err(|e| StoreError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| StoreError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    fs::rename(temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        temp_path: temp_path.to_path_buf(),
        target_path: path.to_path_buf(),
        source: e,
    })
}
