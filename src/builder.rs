use crate::entry::{FileEntry, Listing};
use crate::enumerate::{self, EnumerateOptions, SuffixSet};
use crate::error::PathKitError;
use crate::lookup::{self, Boundary, LookupOptions};
use crate::probe::FsProbe;
use crate::segment::Separator;
use crate::traits::{Matcher, Probe};

// ---------------------------------------------------------------------------
// LookupBuilder
// ---------------------------------------------------------------------------

/// Configures an upward search for a relative target.
///
/// Created via [`pathkit::lookup()`](crate::lookup). The start directory is
/// required; there is no implicit working directory.
///
/// # Example
///
/// ```rust,ignore
/// let manifest = pathkit::lookup("Cargo.toml")
///     .from("/home/me/project/src/bin")
///     .boundary(Boundary::Ceiling("/home/me".into()))
///     .run()?;
/// ```
pub struct LookupBuilder {
    target:    String,
    start:     Option<String>,
    boundary:  Boundary,
    separator: Separator,
    probe:     Box<dyn Probe>,
}

impl LookupBuilder {
    pub(crate) fn new(target: impl Into<String>) -> Self {
        Self {
            target:    target.into(),
            start:     None,
            boundary:  Boundary::default(),
            separator: Separator::default(),
            probe:     Box::new(FsProbe),
        }
    }

    /// The directory the search starts in. Probed before any ascension.
    pub fn from(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Where the search gives up. Defaults to [`Boundary::Root`].
    pub fn boundary(mut self, b: Boundary) -> Self {
        self.boundary = b;
        self
    }

    pub fn separator(mut self, sep: Separator) -> Self {
        self.separator = sep;
        self
    }

    /// Answer existence checks from `p` instead of the real filesystem.
    pub fn probe(mut self, p: impl Probe + 'static) -> Self {
        self.probe = Box::new(p);
        self
    }

    /// Run the search, returning the first `join(dir, target)` that exists.
    ///
    /// # Errors
    ///
    /// [`PathKitError::NotFound`] once the boundary is passed without a
    /// match; [`PathKitError::InvalidInput`] without a start directory or
    /// with an empty target.
    pub fn run(self) -> Result<String, PathKitError> {
        let start = self.start.ok_or_else(|| {
            PathKitError::InvalidInput("no start directory provided".into())
        })?;

        lookup::run(
            self.probe.as_ref(),
            LookupOptions {
                start:     &start,
                target:    &self.target,
                boundary:  &self.boundary,
                separator: self.separator,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// EnumerateBuilder
// ---------------------------------------------------------------------------

/// Configures a listing of the files under a directory.
///
/// Created via [`pathkit::enumerate()`](crate::enumerate). Non-recursive and
/// unfiltered by default.
///
/// # Example
///
/// ```rust,ignore
/// let sources = pathkit::enumerate("src")
///     .recursive(true)
///     .suffixes([".rs", ".toml"])
///     .run()?;
/// ```
pub struct EnumerateBuilder {
    dir:       String,
    recursive: bool,
    suffixes:  SuffixSet,
    matcher:   Option<Box<dyn Matcher>>,
    separator: Separator,
    probe:     Box<dyn Probe>,
}

impl EnumerateBuilder {
    pub(crate) fn new(dir: impl Into<String>) -> Self {
        Self {
            dir:       dir.into(),
            recursive: false,
            suffixes:  SuffixSet::new(),
            matcher:   None,
            separator: Separator::default(),
            probe:     Box::new(FsProbe),
        }
    }

    /// Descend into subdirectories, depth-first.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    // ── Filters ───────────────────────────────────────────────────────────

    /// Keep only files whose name ends with `s`. Repeatable; a file passes
    /// if any suffix matches.
    pub fn suffix(mut self, s: impl Into<String>) -> Self {
        self.suffixes.insert(s);
        self
    }

    pub fn suffixes<I, S>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes.extend(iter);
        self
    }

    /// Add a custom filter. Applied together with any suffixes: a file must
    /// satisfy both.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Plumbing ──────────────────────────────────────────────────────────

    pub fn separator(mut self, sep: Separator) -> Self {
        self.separator = sep;
        self
    }

    /// List directories through `p` instead of the real filesystem.
    pub fn probe(mut self, p: impl Probe + 'static) -> Self {
        self.probe = Box::new(p);
        self
    }

    /// Run the enumeration.
    ///
    /// # Errors
    ///
    /// The first listing failure, on `dir` or any subdirectory visited.
    /// No partial listing is returned.
    pub fn run(self) -> Result<Vec<FileEntry>, PathKitError> {
        let filter = Both {
            suffixes: &self.suffixes,
            custom:   self.matcher.as_deref(),
        };

        enumerate::run(
            self.probe.as_ref(),
            &self.dir,
            EnumerateOptions {
                recursive: self.recursive,
                matcher:   &filter,
                separator: self.separator,
            },
        )
    }
}

/// Suffix set and optional custom matcher, both required to pass.
struct Both<'a> {
    suffixes: &'a SuffixSet,
    custom:   Option<&'a dyn Matcher>,
}

impl Matcher for Both<'_> {
    fn is_match(&self, entry: &Listing) -> bool {
        self.suffixes.is_match(entry) && self.custom.is_none_or(|m| m.is_match(entry))
    }
}
