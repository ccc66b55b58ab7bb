// File: ./src/extract/sources.rs
// Collects raw announcements exported from social feeds, mailboxes and chats.
//
// Each source folder holds one `<name>.txt` per announcement and, when the
// announcement had a poster, a sibling image with the same stem.
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnouncement {
    pub text: String,
    pub image: Option<PathBuf>,
    /// The text file the announcement was read from.
    pub origin: PathBuf,
}

impl RawAnnouncement {
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            image: None,
            origin: PathBuf::new(),
        }
    }
}

fn matching_image(text_path: &Path) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| text_path.with_extension(ext))
        .find(|p| p.exists())
}

/// Reads every `.txt` file of `dir` in file name order.
pub fn collect_announcements(dir: &Path) -> Result<Vec<RawAnnouncement>> {
    let mut text_files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read source folder: {:?}", dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    text_files.sort();

    let mut out = Vec::with_capacity(text_files.len());
    for path in text_files {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read announcement: {:?}", path))?;
        let image = matching_image(&path);
        if image.is_none() {
            log::warn!("No matching image found for {}", path.display());
        }
        out.push(RawAnnouncement {
            text: text.trim().to_string(),
            image,
            origin: path,
        });
    }
    Ok(out)
}

/// Concatenates the announcements of several folders, in the given order.
/// Missing folders are skipped with a warning.
pub fn collect_all<P: AsRef<Path>>(dirs: &[P]) -> Result<Vec<RawAnnouncement>> {
    let mut all = Vec::new();
    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::warn!("Source folder {} does not exist, skipping", dir.display());
            continue;
        }
        let found = collect_announcements(dir)?;
        log::info!("Collected {} announcements from {}", found.len(), dir.display());
        all.extend(found);
    }
    Ok(all)
}
