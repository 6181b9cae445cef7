use crate::entry::Listing;
use crate::error::PathKitError;

/// The filesystem operations the path utilities read through.
///
/// [`FsProbe`](crate::FsProbe) answers from the real filesystem. Implement
/// this to run lookups and enumerations against anything else: an archive,
/// a remote listing, or an in-memory tree in tests.
///
/// # Thread Safety
///
/// `Send + Sync` are required so one probe can back concurrent callers.
/// Nothing in this crate locks around probe calls.
///
/// # Error Handling
///
/// Failures are surfaced to the caller exactly as returned. Report a
/// missing path as [`PathKitError::NotFound`] and an unreadable one as
/// [`PathKitError::PermissionDenied`]; anything else can use
/// [`PathKitError::Probe`].
///
/// # Example
///
/// ```rust
/// use pathkit::{EntryKind, Listing, PathKitError, Probe};
///
/// struct Flat(Vec<&'static str>);
///
/// impl Probe for Flat {
///     fn exists(&self, path: &str) -> bool {
///         path == "/" || self.0.iter().any(|n| path == format!("/{n}"))
///     }
///     fn is_dir(&self, path: &str) -> bool {
///         path == "/"
///     }
///     fn list_entries(&self, path: &str) -> Result<Vec<Listing>, PathKitError> {
///         match path {
///             "/" => Ok(self.0.iter().map(|n| Listing::new(*n, EntryKind::File)).collect()),
///             _   => Err(PathKitError::NotFound(path.into())),
///         }
///     }
///     fn size_of_entry(&self, _path: &str) -> Result<u64, PathKitError> {
///         Ok(1)
///     }
/// }
///
/// let files = pathkit::enumerate("/").suffix(".rs").probe(Flat(vec!["a.rs", "b.md"])).run()?;
/// assert_eq!(files.len(), 1);
/// # Ok::<(), PathKitError>(())
/// ```
pub trait Probe: Send + Sync {
    /// Whether anything exists at `path`. Symbolic links are followed.
    fn exists(&self, path: &str) -> bool;

    /// Whether `path` is a directory. Symbolic links are followed.
    fn is_dir(&self, path: &str) -> bool;

    /// The entries directly inside `path`, in listing order.
    fn list_entries(&self, path: &str) -> Result<Vec<Listing>, PathKitError>;

    /// The size in bytes of the entry at `path`.
    fn size_of_entry(&self, path: &str) -> Result<u64, PathKitError>;
}

/// Decides whether a listed file belongs in an enumeration.
///
/// [`SuffixSet`](crate::SuffixSet) covers the usual extension filter.
///
/// ```rust
/// use pathkit::{Listing, Matcher};
///
/// struct Hidden;
///
/// impl Matcher for Hidden {
///     fn is_match(&self, entry: &Listing) -> bool {
///         entry.name.starts_with('.')
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Listing) -> bool;
}
