use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Error;

/// A process-scoped directory of point-in-time copies of browser data files.
///
/// Live browsers hold their SQLite files under an exclusive write lock and may
/// leave them mid-transaction; querying a copy gives a stable read at the cost
/// of possibly missing the newest activity. The directory and every copy in it
/// are removed when the scope drops, on success and error paths alike.
pub struct SnapshotScope {
    dir: TempDir,
}

impl SnapshotScope {
    pub fn new() -> Result<Self, Error> {
        let dir = TempDir::new().map_err(|err| Error::extraction(std::env::temp_dir(), err))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copy `source` into the scope under `namespace`, returning the copy's
    /// path. Namespacing keeps identically-named files from different
    /// profiles from overwriting each other.
    pub fn copy_into(&self, source: &Path, namespace: &str) -> Result<PathBuf, Error> {
        let target_dir = self.dir.path().join(namespace);
        std::fs::create_dir_all(&target_dir).map_err(|err| Error::extraction(source, err))?;
        let file_name = source
            .file_name()
            .ok_or_else(|| Error::extraction(source, "path has no file name"))?;
        let target = target_dir.join(file_name);
        std::fs::copy(source, &target).map_err(|err| Error::extraction(source, err))?;
        Ok(target)
    }

    /// Snapshot a batch of files, one namespace per input index. Each path is
    /// independent: a copy failure is reported in place and does not abort
    /// the rest of the batch.
    pub fn snapshot_batch(&self, sources: &[PathBuf]) -> Vec<Result<PathBuf, Error>> {
        sources
            .iter()
            .enumerate()
            .map(|(index, source)| self.copy_into(source, &index.to_string()))
            .collect()
    }
}
