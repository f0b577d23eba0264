//! Target directory classification and clearing

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Version-control metadata kept through classification and clearing
const VCS_DIR: &str = ".git";

/// Occupancy state of the target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// The path does not exist
    Absent,
    /// No entries, or only version-control metadata
    Empty,
    /// Anything else
    NonEmpty,
}

/// Classify the target path. A directory whose only entry is `.git` counts
/// as empty: cloning an empty repository and scaffolding into it is a
/// supported flow.
pub fn classify(path: &Path) -> Result<DirState> {
    if !path.exists() {
        return Ok(DirState::Absent);
    }

    let mut names = Vec::new();
    for entry in
        fs::read_dir(path).with_context(|| format!("Failed to read {}", path.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read {}", path.display()))?;
        names.push(entry.file_name());
    }

    match names.as_slice() {
        [] => Ok(DirState::Empty),
        [only] if *only == *VCS_DIR => Ok(DirState::Empty),
        _ => Ok(DirState::NonEmpty),
    }
}

/// Remove every entry under `path` except version-control metadata. Symlinks
/// are removed without being followed. No-op when the path does not exist.
pub fn clear(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    for entry in
        fs::read_dir(path).with_context(|| format!("Failed to read {}", path.display()))?
    {
        let entry = entry?;
        if entry.file_name() == VCS_DIR {
            continue;
        }
        let entry_path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            fs::remove_dir_all(&entry_path)
                .with_context(|| format!("Failed to remove {}", entry_path.display()))?;
        } else {
            fs::remove_file(&entry_path)
                .with_context(|| format!("Failed to remove {}", entry_path.display()))?;
        }
    }

    Ok(())
}
