use std::fs;
use std::path::PathBuf;

use ignore::WalkBuilder;
use log::trace;

use crate::entry::{EntryKind, Listing};
use crate::error::PathKitError;
use crate::traits::Probe;

// ---------------------------------------------------------------------------
// FsProbe
// ---------------------------------------------------------------------------

/// [`Probe`] backed by the real filesystem.
///
/// Listings come from a single-level `ignore` walk with every filter
/// switched off, so hidden files, ignore files and VCS directories are all
/// reported. Links are not followed while listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn exists(&self, path: &str) -> bool {
        fs::metadata(path).is_ok()
    }

    fn is_dir(&self, path: &str) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn list_entries(&self, path: &str) -> Result<Vec<Listing>, PathKitError> {
        let meta = fs::metadata(path).map_err(|e| PathKitError::from_io(path, e))?;
        if !meta.is_dir() {
            return Err(PathKitError::NotADirectory(PathBuf::from(path)));
        }

        let walker = WalkBuilder::new(path)
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(Some(1))
            .build();

        let mut entries = Vec::new();
        for res in walker {
            let entry = res.map_err(map_ignore_error)?;

            // Skip the listed directory itself
            if entry.depth() == 0 {
                continue;
            }

            let kind = match entry.file_type() {
                Some(ft) => EntryKind::from_file_type(ft),
                None     => EntryKind::Other,
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            trace!("list {path}: {name} ({kind:?})");
            entries.push(Listing { name, kind });
        }
        Ok(entries)
    }

    fn size_of_entry(&self, path: &str) -> Result<u64, PathKitError> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| PathKitError::from_io(path, e))
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to PathKitError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> PathKitError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => PathKitError::from_io(path, io_err),
            other                     => map_ignore_error(other),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Loop { child, .. }    => PathKitError::Probe(format!(
            "symlink loop at {}",
            child.display()
        )),
        ignore::Error::Io(io_err) => PathKitError::from_io(PathBuf::new(), io_err),
        other                     => PathKitError::Probe(other.to_string()),
    }
}
