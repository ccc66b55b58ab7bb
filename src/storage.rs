// File: ./src/storage.rs
// Manages the local events file.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the EventRecord serialization format require incrementing
// LOCAL_STORAGE_VERSION below.
use crate::context::AppContext;
use crate::model::EventRecord;
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Version history:
// - v1: events with optional date/time, category and rank
const LOCAL_STORAGE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    events: Vec<EventRecord>,
}

pub struct LocalStorage;

impl LocalStorage {
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.as_os_str().to_owned();
        lock_path.push(".lock");
        PathBuf::from(lock_path)
    }

    /// Runs `f` while holding an exclusive advisory lock next to `file_path`.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    fn parse(json: &str) -> Result<Vec<EventRecord>> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Events file is not valid JSON")?;
        if value.is_array() {
            // Unversioned files are a bare array of events.
            let events: Vec<EventRecord> =
                serde_json::from_value(value).context("Invalid event in events list")?;
            log::info!(
                "Upgrading unversioned events file to v{}",
                LOCAL_STORAGE_VERSION
            );
            return Ok(events);
        }
        let data: LocalStorageData =
            serde_json::from_value(value).context("Invalid versioned events file")?;
        if data.version > LOCAL_STORAGE_VERSION {
            anyhow::bail!(
                "Events file has version {}, newer than supported version {}",
                data.version,
                LOCAL_STORAGE_VERSION
            );
        }
        Ok(data.events)
    }

    pub fn load_from_path(path: &Path) -> Result<Vec<EventRecord>> {
        if !path.exists() {
            return Ok(vec![]);
        }
        Self::with_lock(path, || {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read events file {:?}", path))?;
            Self::parse(&json).with_context(|| format!("Failed to parse events file {:?}", path))
        })
    }

    pub fn save_to_path(path: &Path, events: &[EventRecord]) -> Result<()> {
        let data = LocalStorageData {
            version: LOCAL_STORAGE_VERSION,
            events: events.to_vec(),
        };
        Self::with_lock(path, || {
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(path, json)
        })?;
        log::debug!("Saved {} events to {}", events.len(), path.display());
        Ok(())
    }

    pub fn load(ctx: &dyn AppContext) -> Result<Vec<EventRecord>> {
        Self::load_from_path(&ctx.get_events_path()?)
    }

    pub fn save(ctx: &dyn AppContext, events: &[EventRecord]) -> Result<()> {
        Self::save_to_path(&ctx.get_events_path()?, events)
    }

    /// Adds `new_events` to the stored list in one locked read-modify-write.
    pub fn append(ctx: &dyn AppContext, new_events: &[EventRecord]) -> Result<usize> {
        let path = ctx.get_events_path()?;
        let total = Self::with_lock(&path, || {
            let mut events = if path.exists() {
                Self::parse(&fs::read_to_string(&path)?)?
            } else {
                vec![]
            };
            events.extend_from_slice(new_events);
            let data = LocalStorageData {
                version: LOCAL_STORAGE_VERSION,
                events,
            };
            Self::atomic_write(&path, serde_json::to_string_pretty(&data)?)?;
            Ok(data.events.len())
        })?;
        log::info!("Appended {} events ({} stored)", new_events.len(), total);
        Ok(total)
    }
}
