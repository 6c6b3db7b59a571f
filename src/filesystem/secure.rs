use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Ensure the parent directory of `path` exists and has restrictive permissions on Unix.
pub fn ensure_parent_secure(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(parent).context("Failed to create storage directory")?;
        #[cfg(unix)]
        {
            let perm = fs::Permissions::from_mode(0o700);
            let _ = fs::set_permissions(parent, perm);
        }
    }
    Ok(())
}

/// Atomically replace `path` with `bytes`, owner-only (0600) on Unix.
pub fn atomic_write_secure(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_secure(path)?;
    let tmp_path: PathBuf = path.with_extension("tmp");
    {
        let mut tmp = File::create(&tmp_path).context("Failed to create temporary storage file")?;
        tmp.write_all(bytes)?;
        let _ = tmp.sync_data();
    }

    #[cfg(unix)]
    {
        let perm = fs::Permissions::from_mode(0o600);
        let _ = fs::set_permissions(&tmp_path, perm);
    }

    fs::rename(&tmp_path, path).context("Failed to replace storage file atomically")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parents_and_replaces_content() {
        let td = tempdir().unwrap();
        let path = td.path().join("a").join("b").join("storage.json");
        atomic_write_secure(&path, b"one").unwrap();
        atomic_write_secure(&path, b"two").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"two");
        assert!(!path.with_extension("tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn file_is_owner_only() {
        let td = tempdir().unwrap();
        let path = td.path().join("storage.json");
        atomic_write_secure(&path, b"{}").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
