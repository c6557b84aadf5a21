// Single-key persistence slot backed by a file

use eyre::{Context, Result, eyre};
use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single durable key-value location holding one serialized payload.
///
/// The slot lives as `{key}.json` inside a `.tasklist` subdirectory of the
/// base path. Within a process the slot is exclusively owned by one store;
/// the file lock guards against writers in other processes.
pub struct Slot {
    path: PathBuf,
}

impl Slot {
    /// Open or create the slot for `key` under the given base path.
    ///
    /// Creates the `.tasklist` directory if needed. Failing to create it is
    /// the only fatal error in the persistence layer.
    pub fn open<P: AsRef<Path>>(base: P, key: &str) -> Result<Self> {
        Self::validate_key(key)?;

        let dir = base.as_ref().join(".tasklist");
        fs::create_dir_all(&dir).context("Failed to create slot directory")?;

        Ok(Self {
            path: dir.join(format!("{}.json", key)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored payload. `Ok(None)` when nothing has been written yet.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).context("Failed to read slot file")?;
        Ok(Some(text))
    }

    /// Overwrite the stored payload, replacing any prior content.
    pub fn write(&self, payload: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.path)
            .context("Failed to open slot file for writing")?;

        // Acquire exclusive lock before truncating
        file.lock_exclusive().context("Failed to acquire file lock")?;

        file.set_len(0)?;
        writeln!(file, "{}", payload)?;
        file.sync_all()?;

        debug!(path = ?self.path, bytes = payload.len(), "Slot written");

        // Lock is automatically released when file is dropped
        Ok(())
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(eyre!("Slot key cannot be empty"));
        }
        if key.len() > 64 {
            return Err(eyre!("Slot key too long: {} (max 64 chars)", key));
        }
        if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(eyre!(
                "Invalid slot key: {} (must be alphanumeric with _/-)",
                key
            ));
        }
        Ok(())
    }
}
