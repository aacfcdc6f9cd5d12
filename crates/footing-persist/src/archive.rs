//! Named save and load of layers over a [`TextStore`].

use footing_index::PlacementLayer;

use crate::codec::{deserialize, serialize};
use crate::error::PersistError;
use crate::store::{FsTextStore, TextStore};

/// Saves layers to, and loads line lists from, a [`TextStore`].
///
/// [`save`](Self::save) and [`load`](Self::load) never fail loudly: an
/// I/O problem is logged at `error` and reported as `false` / `None`.
/// The `try_` variants return the [`PersistError`] instead.
#[derive(Debug)]
pub struct LayerArchive<S = FsTextStore> {
    store: S,
}

impl Default for LayerArchive<FsTextStore> {
    fn default() -> Self {
        Self::new(FsTextStore::default())
    }
}

fn check_name(name: &str) -> Result<(), PersistError> {
    let escapes = name.contains(['/', '\\']) || name == "." || name == "..";
    if name.trim().is_empty() || escapes {
        return Err(PersistError::InvalidName {
            name: name.to_owned(),
        });
    }
    Ok(())
}

impl<S: TextStore> LayerArchive<S> {
    /// Archive backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Serialize `layer` and write it under `name` in a single write.
    ///
    /// Returns the number of lines written.
    pub fn try_save(&mut self, layer: &PlacementLayer, name: &str) -> Result<usize, PersistError> {
        check_name(name)?;
        let text = serialize(layer);
        let lines = text.lines().count();
        self.store
            .write_text(name, &text)
            .map_err(|source| PersistError::Io {
                path: self.store.locate(name),
                source,
            })?;
        Ok(lines)
    }

    /// Read the text saved under `name` and split it into lines.
    pub fn try_load(&self, name: &str) -> Result<Vec<String>, PersistError> {
        check_name(name)?;
        let text = self
            .store
            .read_text(name)
            .map_err(|source| PersistError::Io {
                path: self.store.locate(name),
                source,
            })?;
        Ok(deserialize(&text))
    }

    /// Save `layer` under `name`. Returns `true` on success.
    pub fn save(&mut self, layer: &PlacementLayer, name: &str) -> bool {
        match self.try_save(layer, name) {
            Ok(lines) => {
                tracing::info!(layer = layer.name(), save = name, lines, "saved layer");
                true
            }
            Err(e) => {
                tracing::error!(layer = layer.name(), save = name, error = %e, "failed to save layer");
                false
            }
        }
    }

    /// Load the lines saved under `name`, or `None` if they could not be
    /// read.
    pub fn load(&self, name: &str) -> Option<Vec<String>> {
        match self.try_load(name) {
            Ok(lines) => {
                tracing::info!(save = name, lines = lines.len(), "loaded layer");
                Some(lines)
            }
            Err(e) => {
                tracing::error!(save = name, error = %e, "failed to load layer");
                None
            }
        }
    }
}
