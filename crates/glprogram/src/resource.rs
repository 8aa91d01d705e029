//! Identifies shader sources and loads their bytes. The registry treats
//! `ResourceId` as opaque; only loaders interpret it.
//!
//! Types:
//!
//! - `ResourceId` is a `namespace:path` style identifier handed to compilers.
//! - `ResourceLoader` is the capability compilers use to read sources.
//! - `DirectoryLoader` maps identifiers onto files below a root directory.
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `:`, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(':').map(|(namespace, _)| namespace)
    }

    /// The part after the first `:`, or the whole identifier.
    pub fn path(&self) -> &str {
        self.0
            .split_once(':')
            .map(|(_, path)| path)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

pub trait ResourceLoader {
    fn open(&self, id: &ResourceId) -> io::Result<Box<dyn Read + '_>>;

    fn read_to_string(&self, id: &ResourceId) -> io::Result<String> {
        let mut contents = String::new();
        self.open(id)?.read_to_string(&mut contents)?;
        Ok(contents)
    }
}

/// Serves `namespace:path` from `<root>/<namespace>/<path>` and a bare `path`
/// from `<root>/<path>`.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub fn resolve(&self, id: &ResourceId) -> io::Result<PathBuf> {
        let relative = match id.namespace() {
            Some(namespace) => Path::new(namespace).join(id.path()),
            None => PathBuf::from(id.path()),
        };

        let escapes_root = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
        if escapes_root || id.path().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("resource '{id}' does not name a file below the loader root"),
            ));
        }

        Ok(self.root.join(relative))
    }
}

impl ResourceLoader for DirectoryLoader {
    fn open(&self, id: &ResourceId) -> io::Result<Box<dyn Read + '_>> {
        let path = self.resolve(id)?;
        debug!(resource = %id, path = %path.display(), "opening shader resource");
        let file = File::open(&path).map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("failed to open {}: {err}", path.display()),
            )
        })?;
        Ok(Box::new(file))
    }
}
