//! Output artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::kind::CompileKind;

/// File name stem shared by all output artifacts.
const ARTIFACT_STEM: &str = "konjure-min";

/// Path of the artifact for `kind` under `dest`.
pub fn artifact_path(dest: &Path, kind: CompileKind) -> PathBuf {
    dest.join(format!("{ARTIFACT_STEM}{}", kind.suffix()))
}

/// Write `contents` to `<dest>/konjure-min<suffix>`.
///
/// Creates `dest` (including parents) first; overwrites an existing artifact.
pub fn write_artifact(dest: &Path, kind: CompileKind, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dest)?;
    let path = artifact_path(dest, kind);
    fs::write(&path, contents)?;
    Ok(path)
}
