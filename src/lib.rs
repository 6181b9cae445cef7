//! # pathkit
//!
//! Path algebra and directory-tree utilities.
//!
//! pathkit owns the parts of path handling that take a decision: joining
//! fragments that overlap, searching upward for a named entry, trimming the
//! shared portion of two related paths, and walking a tree to list or size
//! its files. Filesystem access goes through the [`Probe`] trait, so every
//! walk can run against something other than the real disk.
//!
//! # Anchored joins
//!
//! [`join`] folds paths left to right. Each step looks for the first
//! component of the next fragment in the result so far, scanning from the
//! end, and splices there; without a shared component it appends.
//!
//! ```rust
//! use pathkit::Separator;
//!
//! let sep = Separator::new('/');
//! assert_eq!(sep.join(["a/b/c.txt", "a/b/d"]), "a/b/d");
//! assert_eq!(sep.join(["/a/b/c/e", "b/d"]), "/a/b/d");
//! assert_eq!(sep.join(["/a", "/b", "c"]), "/b/c");
//! ```
//!
//! # Tree walks
//!
//! ```rust
//! # fn main() -> Result<(), pathkit::PathKitError> {
//! let dir = tempfile::tempdir().unwrap();
//! let root = dir.path().to_str().unwrap();
//! pathkit::io::write(dir.path().join("a.txt"), b"abc")?;
//! pathkit::io::make_dir(dir.path().join("b"))?;
//! pathkit::io::write(dir.path().join("b/b.txt"), b"hello")?;
//!
//! let files = pathkit::enumerate(root).recursive(true).suffix(".txt").run()?;
//! assert_eq!(files.len(), 2);
//! assert_eq!(pathkit::size_of(root)?, 8);
//!
//! let found = pathkit::lookup("a.txt").from(format!("{root}/b")).run()?;
//! assert!(found.ends_with("a.txt"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod io;

mod builder;
mod entry;
mod enumerate;
mod error;
mod join;
mod lookup;
mod overlap;
mod probe;
mod segment;
mod size;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{EnumerateBuilder, LookupBuilder};
pub use entry::{EntryKind, FileEntry, Listing};
pub use enumerate::SuffixSet;
pub use error::PathKitError;
pub use join::{join, merge};
pub use lookup::Boundary;
pub use overlap::trim_overlap;
pub use probe::FsProbe;
pub use segment::{render, split, Segments, Separator};
pub use traits::{Matcher, Probe};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a [`LookupBuilder`] searching upward for `target`.
///
/// # Example
///
/// ```rust,ignore
/// let git = pathkit::lookup(".git").from(project_dir).run()?;
/// ```
pub fn lookup(target: impl Into<String>) -> LookupBuilder {
    LookupBuilder::new(target)
}

/// Create an [`EnumerateBuilder`] listing the files in `dir`.
pub fn enumerate(dir: impl Into<String>) -> EnumerateBuilder {
    EnumerateBuilder::new(dir)
}

/// Total size in bytes of the regular files under `path` on disk.
///
/// # Errors
///
/// The first entry that cannot be listed or sized; no partial total.
pub fn size_of(path: &str) -> Result<u64, PathKitError> {
    size_of_with(&FsProbe, path)
}

/// [`size_of`] reading through `probe`.
pub fn size_of_with(probe: &dyn Probe, path: &str) -> Result<u64, PathKitError> {
    size::run(probe, path, Separator::default())
}
