//! Post-batch artifact cleanup.
//!
//! Deletes the solver's boundary-layer temp file and gives the generated
//! artifacts their final names: the saved coordinates become
//! `<airfoil>.dat`, each polar gets a `.txt` extension.

use std::fs;
use std::path::Path;

use pg_core::AirfoilSpec;
use pg_xfoil::{BL_TEMP_FILE, COORDINATES_PREFIX, POLAR_PREFIX};
use tracing::debug;

use crate::error::AppResult;

/// What cleanup did, for reporting.
#[derive(Debug, Clone, Default)]
pub struct CleanupReport {
    pub removed_temp: bool,
    /// (old name, new name) pairs, one per renamed artifact.
    pub renamed: Vec<(String, String)>,
}

/// Normalize artifact names in `workdir`. Idempotent: a second pass finds
/// no temp file and no un-renamed artifacts and changes nothing.
pub fn cleanup(workdir: &Path, airfoil: &AirfoilSpec) -> AppResult<CleanupReport> {
    let mut report = CleanupReport::default();

    let temp = workdir.join(BL_TEMP_FILE);
    if temp.exists() {
        fs::remove_file(&temp)?;
        report.removed_temp = true;
        debug!(file = BL_TEMP_FILE, "removed solver temp file");
    }

    // Collect names first; renaming while iterating read_dir is undefined
    // on some platforms.
    let mut names = Vec::new();
    for entry in fs::read_dir(workdir)? {
        let entry = entry?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let stem = airfoil.output_stem();
    for name in names {
        if name.starts_with(COORDINATES_PREFIX) {
            let dest = format!("{}.dat", stem);
            rename_overwrite(workdir, &name, &dest)?;
            report.renamed.push((name, dest));
        } else if name.starts_with(POLAR_PREFIX) && !name.ends_with(".txt") {
            let dest = format!("{}.txt", name);
            rename_overwrite(workdir, &name, &dest)?;
            report.renamed.push((name, dest));
        }
    }

    Ok(report)
}

/// Rename within `dir`, replacing any pre-existing destination.
fn rename_overwrite(dir: &Path, old: &str, new: &str) -> std::io::Result<()> {
    let dest = dir.join(new);
    if dest.exists() {
        fs::remove_file(&dest)?;
    }
    fs::rename(dir.join(old), dest)?;
    debug!(from = old, to = new, "renamed artifact");
    Ok(())
}
