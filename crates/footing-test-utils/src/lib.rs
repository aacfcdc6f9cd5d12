//! Test utilities and in-memory stores for Footing development.
//!
//! Provides [`TextStore`] implementations that never touch the file
//! system and a handful of layer fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::io;

use footing_persist::TextStore;

/// [`TextStore`] backed by a `HashMap<String, String>`.
///
/// Counts writes so tests can assert a save hit the store exactly once.
#[derive(Clone, Debug, Default)]
pub struct MemoryTextStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryTextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a blob, as if an earlier session had saved it.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.blobs.insert(name.into(), text.into());
    }

    /// Current contents of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.blobs.get(name).map(String::as_str)
    }

    /// Number of successful `write_text` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TextStore for MemoryTextStore {
    fn write_text(&mut self, name: &str, content: &str) -> io::Result<()> {
        self.blobs.insert(name.to_owned(), content.to_owned());
        self.writes += 1;
        Ok(())
    }

    fn read_text(&self, name: &str) -> io::Result<String> {
        self.blobs
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no blob named {name}")))
    }

    fn locate(&self, name: &str) -> String {
        format!("memory:{name}")
    }
}

/// [`TextStore`] whose every read and write fails with `kind`.
#[derive(Clone, Copy, Debug)]
pub struct FailingTextStore {
    pub kind: io::ErrorKind,
}

impl FailingTextStore {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingTextStore {
    fn default() -> Self {
        Self::new(io::ErrorKind::PermissionDenied)
    }
}

impl TextStore for FailingTextStore {
    fn write_text(&mut self, _name: &str, _content: &str) -> io::Result<()> {
        Err(io::Error::new(self.kind, "write refused"))
    }

    fn read_text(&self, _name: &str) -> io::Result<String> {
        Err(io::Error::new(self.kind, "read refused"))
    }
}
