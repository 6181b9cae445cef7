use log::{debug, trace};

use crate::entry::{EntryKind, FileEntry, Listing};
use crate::error::PathKitError;
use crate::segment::{Segments, Separator};
use crate::traits::{Matcher, Probe};

// ---------------------------------------------------------------------------
// SuffixSet
// ---------------------------------------------------------------------------

/// A set of name suffixes, typically file extensions such as `".txt"`.
///
/// A name matches when it ends with any member. Comparison is exact: no
/// case folding, no separator normalisation. The empty set matches every
/// name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixSet {
    suffixes: Vec<String>,
}

impl SuffixSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, suffix: impl Into<String>) {
        let suffix = suffix.into();
        if !self.suffixes.contains(&suffix) {
            self.suffixes.push(suffix);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || crate::io::has_suffix(name, &self.suffixes)
    }
}

impl<S: Into<String>> FromIterator<S> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for s in iter {
            set.insert(s);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for SuffixSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.insert(s);
        }
    }
}

impl Matcher for SuffixSet {
    fn is_match(&self, entry: &Listing) -> bool {
        self.matches(&entry.name)
    }
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Enumeration parameters passed from the builder.
pub(crate) struct EnumerateOptions<'a> {
    pub recursive: bool,
    pub matcher:   &'a dyn Matcher,
    pub separator: Separator,
}

/// List the files under `dir`, descending depth-first when recursive.
///
/// Any listing failure, at the top or in a subdirectory, aborts the whole
/// enumeration.
pub(crate) fn run(
    probe: &dyn Probe,
    dir: &str,
    opts: EnumerateOptions<'_>,
) -> Result<Vec<FileEntry>, PathKitError> {
    debug!("enumerate {dir:?} (recursive: {})", opts.recursive);

    let mut files = Vec::new();
    let root = opts.separator.split(dir);
    walk(probe, &root, &opts, &mut files)?;

    debug!("enumerate {dir:?}: {} file(s)", files.len());
    Ok(files)
}

fn walk(
    probe: &dyn Probe,
    dir: &Segments,
    opts: &EnumerateOptions<'_>,
    files: &mut Vec<FileEntry>,
) -> Result<(), PathKitError> {
    let sep = opts.separator;
    let listing = probe.list_entries(&dir.render(sep))?;

    for entry in &listing {
        // Entry names are single components; append them verbatim so a
        // child sharing its parent's name is not mistaken for an anchor.
        let child = dir.child(&entry.name);

        let is_file = match entry.kind {
            EntryKind::Dir => {
                if opts.recursive {
                    trace!("enumerate: descend into {:?}", entry.name);
                    walk(probe, &child, opts, files)?;
                }
                false
            }
            EntryKind::File => true,
            // Followed once; linked directories are never descended into.
            EntryKind::Symlink => !probe.is_dir(&child.render(sep)),
            EntryKind::Other => false,
        };

        if is_file && opts.matcher.is_match(entry) {
            let path = child.render(sep);
            trace!("enumerate: {path}");
            files.push(FileEntry::new(path, sep));
        }
    }
    Ok(())
}
