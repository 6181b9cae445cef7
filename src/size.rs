use log::{debug, trace};

use crate::entry::EntryKind;
use crate::error::PathKitError;
use crate::segment::{Segments, Separator};
use crate::traits::Probe;

/// Sum the sizes of every regular file under `path`.
///
/// A `path` that is not a directory is sized on its own. Directory entries
/// themselves contribute nothing, nor do symbolic links, which are not
/// followed. The first unreadable entry fails the whole walk.
pub(crate) fn run(probe: &dyn Probe, path: &str, sep: Separator) -> Result<u64, PathKitError> {
    let total = if probe.is_dir(path) {
        accumulate(probe, &sep.split(path), sep)?
    } else {
        probe.size_of_entry(path)?
    };

    debug!("size of {path:?}: {total} byte(s)");
    Ok(total)
}

fn accumulate(probe: &dyn Probe, dir: &Segments, sep: Separator) -> Result<u64, PathKitError> {
    let mut total = 0u64;
    for entry in probe.list_entries(&dir.render(sep))? {
        let child = dir.child(&entry.name);
        match entry.kind {
            EntryKind::Dir  => total += accumulate(probe, &child, sep)?,
            EntryKind::File => {
                let path = child.render(sep);
                let size = probe.size_of_entry(&path)?;
                trace!("size: {path} = {size}");
                total += size;
            }
            EntryKind::Symlink | EntryKind::Other => {}
        }
    }
    Ok(total)
}
