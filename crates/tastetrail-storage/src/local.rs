//! Local filesystem backend. Each key is a file below a root directory,
//! with `/` in keys mapping to subdirectories.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StorageError;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Map a key to a path below `root`, rejecting anything that could escape it.
pub fn resolve(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let invalid = || StorageError::InvalidKey {
        key: key.to_string(),
    };

    if key.is_empty() || key.starts_with('/') || key.contains('\\') {
        return Err(invalid());
    }

    let mut path = root.to_path_buf();
    for segment in key.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.starts_with('.') {
            return Err(invalid());
        }
        path.push(segment);
    }
    Ok(path)
}

pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = resolve(root, key)?;
    match tokio::fs::read(&path).await {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
            key: key.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Write through a temporary sibling file and rename it into place, so
/// readers never observe a half-written document.
pub async fn put_object(root: &Path, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let path = resolve(root, key)?;
    let parent = path.parent().ok_or_else(|| StorageError::InvalidKey {
        key: key.to_string(),
    })?;
    tokio::fs::create_dir_all(parent).await?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_path = parent.join(format!(".{file_name}.{}.{n}.tmp", std::process::id()));

    tokio::fs::write(&tmp_path, &body).await?;
    if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e.into());
    }
    Ok(())
}

/// Delete a file. Deleting a missing key succeeds.
pub async fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    let path = resolve(root, key)?;
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// List every key starting with `prefix`, sorted. Hidden files (including
/// in-flight temporary files) are skipped.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    // Only walk the deepest directory the prefix pins down.
    let (start_dir, start_key) = match prefix.rfind('/') {
        Some(idx) => {
            let dir_key = &prefix[..idx];
            (resolve(root, dir_key)?, format!("{dir_key}/"))
        }
        None => (root.to_path_buf(), String::new()),
    };

    let mut keys = Vec::new();
    let mut pending = vec![(start_dir, start_key)];

    while let Some((dir, key_prefix)) = pending.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let key = format!("{key_prefix}{name}");
            if entry.file_type().await?.is_dir() {
                pending.push((entry.path(), format!("{key}/")));
            } else if key.starts_with(prefix) {
                keys.push(key);
            }
        }
    }

    keys.sort();
    Ok(keys)
}
