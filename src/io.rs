//! Thin wrappers over platform file I/O with crate errors.
//!
//! Nothing here carries semantics beyond the underlying call; the path
//! algebra and tree walks elsewhere in the crate read through
//! [`Probe`](crate::Probe) instead.

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::trace;

use crate::error::PathKitError;

/// How many lines [`scan`] delivers between progress log records.
const SCAN_PROGRESS_INTERVAL: usize = 1024;

// ── Contents ──────────────────────────────────────────────────────────────

pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>, PathKitError> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| PathKitError::from_io(path, e))
}

/// Write `content` to `path`, creating or truncating it.
pub fn write(path: impl AsRef<Path>, content: &[u8]) -> Result<(), PathKitError> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| PathKitError::from_io(path, e))
}

/// Append `content` to `path`, creating it if missing.
pub fn append(path: impl AsRef<Path>, content: &[u8]) -> Result<(), PathKitError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| PathKitError::from_io(path, e))?;
    file.write_all(content)
        .map_err(|e| PathKitError::from_io(path, e))
}

/// Feed each line of `path` to `reader`, without its line terminator.
///
/// Stops at the first error `reader` returns, reported as
/// [`PathKitError::Reader`]. Returns the number of lines delivered.
pub fn scan<F, E>(path: impl AsRef<Path>, mut reader: F) -> Result<usize, PathKitError>
where
    F: FnMut(&[u8]) -> Result<(), E>,
    E: Display,
{
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| PathKitError::from_io(path, e))?;
    let mut buf = BufReader::new(file);

    let mut line = Vec::new();
    let mut count = 0usize;
    loop {
        line.clear();
        let n = buf
            .read_until(b'\n', &mut line)
            .map_err(|e| PathKitError::from_io(path, e))?;
        if n == 0 {
            break;
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        reader(&line).map_err(|e| PathKitError::Reader(e.to_string()))?;
        count += 1;
        if count % SCAN_PROGRESS_INTERVAL == 0 {
            trace!("scan {}: {count} line(s)", path.display());
        }
    }
    Ok(count)
}

// ── Tree mutation ─────────────────────────────────────────────────────────

/// Remove `path` and everything beneath it. A missing path is not an error.
pub fn remove(path: impl AsRef<Path>) -> Result<(), PathKitError> {
    let path = path.as_ref();
    let res = match fs::symlink_metadata(path) {
        Ok(m) if m.is_dir() => fs::remove_dir_all(path),
        Ok(_)               => fs::remove_file(path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e)              => Err(e),
    };
    res.map_err(|e| PathKitError::from_io(path, e))
}

/// Create `path` and any missing parents.
pub fn make_dir(path: impl AsRef<Path>) -> Result<(), PathKitError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| PathKitError::from_io(path, e))
}

// ── Checks ────────────────────────────────────────────────────────────────

pub fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Whether `path` exists and is anything but a directory.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}

pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether `name` ends with any of `suffixes`. An empty list matches nothing.
pub fn has_suffix<S: AsRef<str>>(name: &str, suffixes: &[S]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s.as_ref()))
}

/// The link target of a symbolic link, else the final component of `path`.
///
/// The target is read one level deep and returned as stored, possibly
/// relative; chains of links are not followed.
pub fn real_name(path: impl AsRef<Path>) -> Result<String, PathKitError> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).map_err(|e| PathKitError::from_io(path, e))?;

    if meta.file_type().is_symlink() {
        let target = fs::read_link(path).map_err(|e| PathKitError::from_io(path, e))?;
        return Ok(target.to_string_lossy().into_owned());
    }

    Ok(path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_suffix_any_member() {
        assert!(has_suffix("a.txt", &[".md", ".txt"]));
        assert!(!has_suffix("a.TXT", &[".txt"]));
        assert!(!has_suffix::<&str>("a.txt", &[]));
    }

    #[test]
    fn scan_strips_terminators_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, "one\r\ntwo\nthree").unwrap();

        let mut seen = Vec::new();
        let n = scan(&path, |line| {
            seen.push(String::from_utf8_lossy(line).into_owned());
            Ok::<(), String>(())
        })
        .unwrap();

        assert_eq!(n, 3);
        assert_eq!(seen, ["one", "two", "three"]);
    }

    #[test]
    fn scan_reader_error_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, "a\nb\nc\n").unwrap();

        let mut calls = 0;
        let err = scan(&path, |line| {
            calls += 1;
            if line == b"b" { Err("stop") } else { Ok(()) }
        })
        .unwrap_err();

        assert!(matches!(err, PathKitError::Reader(ref m) if m == "stop"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn write_append_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        append(&path, b"ab").unwrap();
        append(&path, b"cd").unwrap();
        assert_eq!(read(&path).unwrap(), b"abcd");
        write(&path, b"x").unwrap();
        assert_eq!(read(&path).unwrap(), b"x");
    }

    #[test]
    fn read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read(dir.path().join("nope")).unwrap_err().is_not_found());
    }

    #[test]
    fn make_dir_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a/b/c");
        make_dir(&deep).unwrap();
        assert!(is_dir(&deep));
        assert!(!is_file(&deep));

        remove(dir.path().join("a")).unwrap();
        assert!(!exists(dir.path().join("a")));
        remove(dir.path().join("a")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn real_name_reads_one_link_level() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, "x").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("target.txt", &link).unwrap();

        assert_eq!(real_name(&link).unwrap(), "target.txt");
        assert_eq!(real_name(&target).unwrap(), "target.txt");
    }
}
