use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VpeakError};

/// `~/x` -> `$HOME/x`. Paths that can't be represented as UTF-8 are left as they are.
pub(crate) fn expand_tilde(p: &Path) -> PathBuf {
    match p.to_str() {
        Some(s) if s.starts_with('~') => PathBuf::from(shellexpand::tilde(s).into_owned()),
        _ => p.to_path_buf(),
    }
}

/// Paths written in a preferences file are relative to that file's directory, not to wherever
/// vpeak happens to be run from.
pub(crate) fn resolve_relative(base_dir: &Path, path: Option<&Path>) -> Option<PathBuf> {
    let expanded = expand_tilde(path?);
    Some(if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    })
}

/// Swap whatever extension a file has for the audio one, eg: `chapter1.txt` -> `chapter1.wav`.
pub fn audio_file_name(file_name: &Path, audio_ext: &str) -> PathBuf {
    file_name.with_extension(audio_ext)
}

/// Regular `.txt` files directly inside `dir`, sorted by name. Subdirectories and other
/// extensions are skipped without comment.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| VpeakError::DirectoryReadFailed {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        // Follows symlinks, same as the engine would when reading the file.
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
