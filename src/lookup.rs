use std::path::PathBuf;

use log::{debug, trace};

use crate::error::PathKitError;
use crate::segment::Separator;
use crate::traits::Probe;

/// Where an ancestor lookup gives up.
///
/// Whichever boundary is chosen, the directory it names is still probed;
/// the search stops after it instead of ascending further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Ascend until there is no parent left: the filesystem root for an
    /// absolute start, the `.` marker for a relative one.
    #[default]
    Root,

    /// Stop at this directory, e.g. the caller's working directory. A start
    /// outside the ceiling never reaches it and runs on to [`Boundary::Root`].
    Ceiling(String),
}

/// Lookup parameters passed from the builder.
pub(crate) struct LookupOptions<'a> {
    pub start:     &'a str,
    pub target:    &'a str,
    pub boundary:  &'a Boundary,
    pub separator: Separator,
}

/// Walk upward from `opts.start` until `join(current, target)` exists.
///
/// Returns the joined path that was found. Each ascension moves `current`
/// to its parent; the walk ends at the configured [`Boundary`].
pub(crate) fn run(probe: &dyn Probe, opts: LookupOptions<'_>) -> Result<String, PathKitError> {
    if opts.target.is_empty() {
        return Err(PathKitError::InvalidInput("lookup target is empty".into()));
    }

    let sep = opts.separator;
    let target = sep.split(opts.target);
    let start = if opts.start.is_empty() { "." } else { opts.start };
    let ceiling = match opts.boundary {
        Boundary::Root       => None,
        Boundary::Ceiling(c) => Some(sep.split(c).normalized()),
    };

    debug!("lookup {:?} from {start:?} (boundary {:?})", opts.target, opts.boundary);

    let mut current = sep.split(start);
    let mut ascensions = 0usize;
    loop {
        let candidate = sep.merge_segments(&current, &target).render(sep);
        if probe.exists(&candidate) {
            debug!("lookup {:?}: found {candidate:?} after {ascensions} ascension(s)", opts.target);
            return Ok(candidate);
        }

        if ceiling.as_ref() == Some(&current.normalized()) {
            trace!("lookup: reached ceiling {:?}", current.render(sep));
            break;
        }

        match current.parent() {
            Some(parent) => {
                ascensions += 1;
                trace!("lookup: ascend to {:?}", parent.render(sep));
                current = parent;
            }
            None => break,
        }
    }

    debug!("lookup {:?}: exhausted after {ascensions} ascension(s)", opts.target);
    Err(PathKitError::NotFound(PathBuf::from(opts.target)))
}
