//! Brand profile store backed by a directory of `.txt` / `.md` files.
//!
//! Reads never touch the disk; the directory is only rescanned when the
//! owner calls [`ProfileStore::reload`].

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{BvError, Result};
use crate::types::BrandSummary;

const PROFILE_EXTENSIONS: &[&str] = &["txt", "md"];
const PREVIEW_CHARS: usize = 200;

/// Raw profile text for one brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandProfile {
    pub name: String,
    pub content: String,
    pub source: Option<PathBuf>,
}

impl BrandProfile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into(), source: None }
    }

    /// First 200 characters followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.content.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }

    pub fn summary(&self) -> BrandSummary {
        BrandSummary { name: self.name.clone(), preview: self.preview() }
    }
}

#[derive(Debug, Default)]
struct Inner {
    profiles: HashMap<String, Arc<BrandProfile>>,
    loaded_at: Option<DateTime<Utc>>,
}

/// Shared, explicitly reloaded map of brand name to profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    dir: Option<PathBuf>,
    inner: Arc<RwLock<Inner>>,
}

impl ProfileStore {
    /// Empty store with no backing directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `dir`. Nothing is read until [`reload`](Self::reload).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Some(dir.into()), inner: Arc::default() }
    }

    /// Create a store for `dir` and load it immediately.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let store = Self::with_dir(dir);
        store.reload();
        store
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Rescan the backing directory, replacing every loaded profile.
    ///
    /// Unreadable files are skipped; a missing directory leaves the store empty.
    /// Returns the number of profiles now loaded.
    pub fn reload(&self) -> usize {
        let profiles = match &self.dir {
            Some(dir) => scan_dir(dir),
            None => {
                // In-memory store: keep whatever was inserted.
                let mut inner = self.inner.write();
                inner.loaded_at = Some(Utc::now());
                return inner.profiles.len();
            }
        };
        let count = profiles.len();
        let mut inner = self.inner.write();
        inner.profiles = profiles;
        inner.loaded_at = Some(Utc::now());
        tracing::info!(count, "brand profiles loaded");
        count
    }

    pub fn insert(&self, profile: BrandProfile) {
        self.inner.write().profiles.insert(profile.name.clone(), Arc::new(profile));
    }

    pub fn get(&self, name: &str) -> Option<Arc<BrandProfile>> {
        self.inner.read().profiles.get(name).cloned()
    }

    /// Like [`get`](Self::get) but reports a missing brand as an error.
    pub fn require(&self, name: &str) -> Result<Arc<BrandProfile>> {
        self.get(name).ok_or_else(|| BvError::BrandNotFound { name: name.to_string() })
    }

    /// Brand names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Listing entries sorted by brand name.
    pub fn summaries(&self) -> Vec<BrandSummary> {
        let inner = self.inner.read();
        let mut out: Vec<BrandSummary> = inner.profiles.values().map(|p| p.summary()).collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    pub fn len(&self) -> usize {
        self.inner.read().profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().loaded_at
    }
}

fn is_profile_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PROFILE_EXTENSIONS.contains(&ext))
}

/// Read one profile file; the brand name is the file stem.
pub fn read_profile(path: &Path) -> Result<BrandProfile> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| BvError::ProfileIo { path: path.to_path_buf(), source })?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    Ok(BrandProfile { name, content, source: Some(path.to_path_buf()) })
}

fn scan_dir(dir: &Path) -> HashMap<String, Arc<BrandProfile>> {
    let mut profiles = HashMap::new();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "brand profile directory unavailable");
            return profiles;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_profile_file(&path) {
            continue;
        }
        match read_profile(&path) {
            Ok(profile) if !profile.name.is_empty() => {
                tracing::debug!(brand = %profile.name, "loaded brand profile");
                profiles.insert(profile.name.clone(), Arc::new(profile));
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "skipping brand profile"),
        }
    }
    profiles
}
