//! Async filesystem helpers used by the bundle writers.
//!
//! Every failure carries the path that caused it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BridgeError, Result};

/// Create `path` and any missing parents. Succeeds if it already exists.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| BridgeError::io(path, e))
}

/// Create or overwrite the file at `path` with `content`.
pub async fn write_text(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing file");
    tokio::fs::write(path, content)
        .await
        .map_err(|e| BridgeError::io(path, e))
}

/// Recursively copy the directory tree at `src` into `dst`.
///
/// `dst` is created if missing and existing files are overwritten. Symlinks
/// to regular files are copied as files; other special entries are skipped.
pub async fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    let meta = tokio::fs::metadata(src)
        .await
        .map_err(|e| BridgeError::io(src, e))?;
    if !meta.is_dir() {
        return Err(BridgeError::NotADirectory {
            path: src.to_path_buf(),
        });
    }

    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(src.to_path_buf(), dst.to_path_buf())];

    while let Some((from, to)) = pending.pop() {
        ensure_dir(&to).await?;

        let mut entries = tokio::fs::read_dir(&from)
            .await
            .map_err(|e| BridgeError::io(&from, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| BridgeError::io(&from, e))?
        {
            let path = entry.path();
            let target = to.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| BridgeError::io(&path, e))?;

            if file_type.is_dir() {
                pending.push((path, target));
            } else if file_type.is_file() || is_symlinked_file(&path, file_type).await {
                tokio::fs::copy(&path, &target)
                    .await
                    .map_err(|e| BridgeError::io(&path, e))?;
            } else {
                debug!(path = %path.display(), "skipping special file");
            }
        }
    }

    Ok(())
}

async fn is_symlinked_file(path: &Path, file_type: std::fs::FileType) -> bool {
    file_type.is_symlink()
        && tokio::fs::metadata(path)
            .await
            .is_ok_and(|meta| meta.is_file())
}
