use crate::segment::Separator;

/// One item reported by a [`Probe`](crate::traits::Probe) directory listing.
///
/// Only the bare name is carried; callers build the full path by appending
/// `name` to the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// The entry's file name, lossily converted to UTF-8.
    pub name: String,

    /// What kind of entry this is, without following symbolic links.
    pub kind: EntryKind,
}

impl Listing {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// The kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link. Resolved one level at most.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }
}

/// A file produced by enumeration: the resolved path of a regular file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileEntry {
    pub path:  String,
    separator: Separator,
}

impl FileEntry {
    pub(crate) fn new(path: String, separator: Separator) -> Self {
        Self { path, separator }
    }

    /// The final path component, split on the separator the path was
    /// built with.
    pub fn name(&self) -> &str {
        self.path
            .rsplit(self.separator.as_char())
            .next()
            .unwrap_or(&self.path)
    }
}

impl AsRef<str> for FileEntry {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<std::path::Path> for FileEntry {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.path)
    }
}
