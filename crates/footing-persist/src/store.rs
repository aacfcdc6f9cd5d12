//! Backing stores for saved layer text.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::DEFAULT_SAVE_DIR;

/// Somewhere named text blobs can be written and read back whole.
///
/// [`LayerArchive`](crate::LayerArchive) only talks to this trait, so
/// tests can swap the file system for an in-memory map.
pub trait TextStore {
    /// Replace the blob called `name` with `content`.
    fn write_text(&mut self, name: &str, content: &str) -> io::Result<()>;

    /// Read the whole blob called `name`.
    fn read_text(&self, name: &str) -> io::Result<String>;

    /// Human-readable location of `name`, for logs and errors.
    fn locate(&self, name: &str) -> String {
        name.to_owned()
    }
}

/// Stores each blob as a file under a root directory.
///
/// Writes go to `<name>.tmp` first and are renamed over the target once
/// flushed, so a failed save leaves the previous file in place.
#[derive(Clone, Debug)]
pub struct FsTextStore {
    root: PathBuf,
}

impl FsTextStore {
    /// Store files under `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the files live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file for `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Scratch file a write of `name` goes through.
    pub fn staging_path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.tmp"))
    }
}

impl Default for FsTextStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DIR)
    }
}

impl TextStore for FsTextStore {
    fn write_text(&mut self, name: &str, content: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let staging = self.staging_path_for(name);
        let staged = File::create(&staging).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = staged {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        fs::rename(&staging, self.path_for(name))
    }

    fn read_text(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.path_for(name))
    }

    fn locate(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("footing-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn default_root_is_save_dir() {
        assert_eq!(FsTextStore::default().root(), Path::new("SaveFiles"));
    }

    #[test]
    fn write_creates_directory_and_round_trips() {
        let root = scratch_dir("rt").join("nested");
        let mut store = FsTextStore::new(&root);
        store.write_text("floor", "1:(0, 0, 0):0\n").unwrap();
        assert!(root.is_dir());
        assert_eq!(store.read_text("floor").unwrap(), "1:(0, 0, 0):0\n");

        store.write_text("floor", "").unwrap();
        assert_eq!(store.read_text("floor").unwrap(), "");
        fs::remove_dir_all(root.parent().unwrap()).unwrap();
    }

    #[test]
    fn write_leaves_no_staging_file() {
        let root = scratch_dir("staging");
        let mut store = FsTextStore::new(&root);
        store.write_text("walls", "2:(1, 0, 1):90\n").unwrap();
        assert!(store.path_for("walls").is_file());
        assert!(!store.staging_path_for("walls").exists());
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn failed_write_keeps_previous_file() {
        let root = scratch_dir("keep");
        let mut store = FsTextStore::new(&root);
        store.write_text("floor", "1:(0, 0, 0):0\n").unwrap();
        // A directory squatting on the staging path makes the next write fail.
        fs::create_dir(store.staging_path_for("floor")).unwrap();
        assert!(store.write_text("floor", "").is_err());
        assert_eq!(store.read_text("floor").unwrap(), "1:(0, 0, 0):0\n");
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let store = FsTextStore::new(scratch_dir("missing"));
        let err = store.read_text("nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn locate_includes_root() {
        let store = FsTextStore::new("saves");
        assert_eq!(store.locate("walls"), Path::new("saves").join("walls").display().to_string());
    }
}
