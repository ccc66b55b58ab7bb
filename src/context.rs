// File: ./src/context.rs
/*! Where the application keeps its files.

`AppContext` answers "which directory" questions for the rest of the crate:

- `StandardContext`: platform directories from `directories::ProjectDirs`,
  or `data`/`config` folders under an override root (the `--root` flag).
- `TestContext`: a throwaway temporary root, removed on drop.

There are no global or environment-var based helpers. Code that touches
the filesystem takes a `&dyn AppContext`.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// The trait is object-safe so callers can hold `Arc<dyn AppContext>`.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_events_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join("events.json"))
    }

    fn get_log_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join("eventline.log"))
    }
}

#[derive(Clone, Copy, Debug)]
enum Dir {
    Data,
    Config,
}

impl Dir {
    fn subdir(self) -> &'static str {
        match self {
            Dir::Data => "data",
            Dir::Config => "config",
        }
    }
}

fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(path)
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn resolve(&self, dir: Dir) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return ensure_exists(root.join(dir.subdir()));
        }
        let proj = ProjectDirs::from("org", "eventline", "eventline")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))?;
        let path = match dir {
            Dir::Data => proj.data_dir(),
            Dir::Config => proj.config_dir(),
        };
        ensure_exists(path.to_path_buf())
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        self.resolve(Dir::Data)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.resolve(Dir::Config)
    }
}

// --- Test Implementation ---

#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// A context rooted in a fresh directory under the OS temp dir.
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("eventline_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        ensure_exists(self.root.join(Dir::Data.subdir()))
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        ensure_exists(self.root.join(Dir::Config.subdir()))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Best-effort cleanup; ignore errors.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

