//! Destination directory planning and creation.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Derives the union of parent directories of every destination in the
/// manifest, rooted at the project root. The set is sorted, so creation
/// order is stable run to run.
pub fn plan(manifest: &Manifest, root: &Path) -> BTreeSet<PathBuf> {
    let mut dirs = BTreeSet::new();
    for entry in manifest.entries() {
        if let Some(parent) = Path::new(entry.dest).parent() {
            if !parent.as_os_str().is_empty() {
                dirs.insert(root.join(parent));
            }
        }
    }
    dirs
}

/// Creates the project root.
///
/// This is the single overwrite guard of a run: an existing root fails
/// with `AlreadyExists` before anything on disk is mutated.
pub fn create_root(root: &Path) -> Result<()> {
    if root.exists() {
        return Err(Error::AlreadyExists { path: root.display().to_string() });
    }
    debug!("Creating project root {}", root.display());
    fs::create_dir_all(root)?;
    Ok(())
}

/// Creates every planned directory. Intermediate directories that already
/// exist are not an error.
pub fn create_dirs(dirs: &BTreeSet<PathBuf>) -> Result<()> {
    for dir in dirs {
        debug!("Creating directory {}", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
