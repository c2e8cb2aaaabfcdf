//! Persistence of palettes behind a small key-value interface.
//!
//! Any backend implementing [`KeyValueStore`] can hold a
//! [`PaletteLibrary`]: [`MemoryStore`] for tests and throwaway
//! sessions, [`FileStore`] for a directory on disk.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};
use crate::{Error, Palette, Result};

/// Key under which a [`PaletteLibrary`] stores its palettes.
pub const PALETTES_KEY: &str = "colorPalettes";

/// String values addressed by string keys.
pub trait KeyValueStore {
    /// The value of `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Remove `key`.  Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

/// Store keeping each key in its own file `<dir>/<key>.json`.
///
/// Keys are restricted to ASCII letters, digits, `-` and `_`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use the directory `dir`, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened file store");
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path { &self.dir }

    fn path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty() && key.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid { return Err(Error::InvalidKey(key.to_string())) }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)?) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path(key)?, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// The saved palettes, newest first, written back to the store after
/// every change.
#[derive(Debug)]
pub struct PaletteLibrary<S> {
    store: S,
    palettes: Vec<Palette>,
}

impl<S: KeyValueStore> PaletteLibrary<S> {
    /// Load the palettes saved in `store` (none if the key is absent).
    #[instrument(skip_all)]
    pub fn open(store: S) -> Result<Self> {
        let palettes: Vec<Palette> = match store.get(PALETTES_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                warn!("cannot read saved palettes: {e}");
                e
            })?,
            None => vec![],
        };
        debug!(count = palettes.len(), "loaded palettes");
        Ok(PaletteLibrary { store, palettes })
    }

    /// Write `palettes` to the store, then make them current.  On
    /// error the library is left unchanged.
    fn commit(&mut self, palettes: Vec<Palette>) -> Result<()> {
        let json = serde_json::to_string(&palettes)?;
        self.store.set(PALETTES_KEY, &json)?;
        self.palettes = palettes;
        Ok(())
    }

    /// The palettes, newest first.
    pub fn palettes(&self) -> &[Palette] { &self.palettes }

    pub fn len(&self) -> usize { self.palettes.len() }

    pub fn is_empty(&self) -> bool { self.palettes.is_empty() }

    pub fn get(&self, id: u64) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id() == id)
    }

    /// Insert `palette` in front and return its id.  If the id is
    /// already taken (two palettes created in the same millisecond),
    /// the next free id is used.
    pub fn add(&mut self, mut palette: Palette) -> Result<u64> {
        let mut id = palette.id();
        while self.get(id).is_some() { id += 1 }
        palette.set_id(id);
        let mut palettes = Vec::with_capacity(self.palettes.len() + 1);
        palettes.push(palette);
        palettes.extend(self.palettes.iter().cloned());
        self.commit(palettes)?;
        debug!(id, "palette added");
        Ok(id)
    }

    /// Replace the palette with the same id, keeping its position.
    /// Returns `false` if there is none.
    pub fn replace(&mut self, palette: Palette) -> Result<bool> {
        let Some(i) = self.palettes.iter().position(|p| p.id() == palette.id())
        else { return Ok(false) };
        let mut palettes = self.palettes.clone();
        palettes[i] = palette;
        self.commit(palettes)?;
        Ok(true)
    }

    /// Delete the palette `id` and return it.
    pub fn delete(&mut self, id: u64) -> Result<Option<Palette>> {
        let Some(i) = self.palettes.iter().position(|p| p.id() == id)
        else { return Ok(None) };
        let mut palettes = self.palettes.clone();
        let p = palettes.remove(i);
        self.commit(palettes)?;
        debug!(id, "palette deleted");
        Ok(Some(p))
    }

    pub fn store(&self) -> &S { &self.store }

    pub fn into_store(self) -> S { self.store }
}
