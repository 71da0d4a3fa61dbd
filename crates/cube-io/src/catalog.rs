//! Catalog listing of candidate cube files.

use ring_common::RingResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-name suffix of calibrated, map-projected cubes.
const CUBE_SUFFIX: &str = ".map.cal.cub";

/// Lists processed cube files under a data root.
///
/// The root is explicit configuration; there is no ambient default
/// directory. Matching files follow the `<root>/opus/*/*.map.cal.cub`
/// layout: one observation directory per cube, directly under `opus`.
#[derive(Debug, Clone)]
pub struct CubeCatalog {
    root: PathBuf,
}

impl CubeCatalog {
    /// Create a catalog over the given data root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured data root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate matching cube files in directory-traversal order.
    ///
    /// A missing `opus` directory yields an empty list rather than an
    /// error, matching glob semantics over an unpopulated root.
    pub fn list(&self) -> RingResult<Vec<PathBuf>> {
        let opus = self.root.join("opus");
        if !opus.is_dir() {
            debug!(root = %self.root.display(), "no opus directory under data root");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in walkdir::WalkDir::new(&opus).min_depth(2).max_depth(2) {
            let entry = entry.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .map(|name| name.ends_with(CUBE_SUFFIX))
                .unwrap_or(false);
            if matches {
                paths.push(entry.into_path());
            }
        }

        debug!(root = %self.root.display(), count = paths.len(), "listed cube files");
        Ok(paths)
    }
}
