use log::trace;

/// Strip from `candidate` the longest leading run of its `/`-separated
/// components that occurs anywhere inside `reference`, returning what is
/// left.
///
/// The separator that followed the matched prefix is kept. When no
/// non-empty prefix of `candidate` occurs in `reference` the result is the
/// empty string, and so is a `candidate` found whole inside `reference`.
///
/// Always splits on `/`; these are module-style paths, not platform paths.
///
/// ```rust
/// assert_eq!(
///     pathkit::trim_overlap(
///         "/pkg/mod/github.com/polydawn/refmt",
///         "github.com/polydawn/refmt/shared",
///     ),
///     "/shared",
/// );
/// ```
pub fn trim_overlap(reference: &str, candidate: &str) -> String {
    let components: Vec<&str> = candidate.split('/').collect();

    for i in (1..=components.len()).rev() {
        let prefix = components[..i].join("/");
        // The empty prefix occurs everywhere; it never counts as overlap.
        if prefix.is_empty() {
            break;
        }
        if reference.contains(&prefix) {
            trace!("trim_overlap: {prefix:?} found in {reference:?}");
            return candidate
                .strip_prefix(prefix.as_str())
                .unwrap_or_default()
                .to_owned();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_path_fixture() {
        assert_eq!(
            trim_overlap("/pkg/mod/github.com/polydawn/refmt", "github.com/polydawn/refmt/shared"),
            "/shared"
        );
    }

    #[test]
    fn whole_candidate_inside_reference_trims_everything() {
        assert_eq!(trim_overlap("/root/a/b/c", "a/b"), "");
    }

    #[test]
    fn no_shared_prefix_yields_empty() {
        assert_eq!(trim_overlap("/x/y", "q/r"), "");
        assert_eq!(trim_overlap("", "q"), "");
    }

    #[test]
    fn absolute_candidate_without_overlap_yields_empty() {
        assert_eq!(trim_overlap("/x", "/q/r"), "");
        assert_eq!(trim_overlap("/x", "/"), "");
    }

    #[test]
    fn longest_prefix_is_preferred() {
        // Both "a" and "a/b" occur; the longer one is removed.
        assert_eq!(trim_overlap("/a/b", "a/b/c/d"), "/c/d");
    }

    #[test]
    fn substring_match_is_not_component_aligned() {
        // "ab" occurs inside "xaby" even though it is not a whole component.
        assert_eq!(trim_overlap("/xaby", "ab/c"), "/c");
    }

    #[test]
    fn leading_separator_in_candidate() {
        assert_eq!(trim_overlap("/a/b", "/a/z"), "/z");
    }
}
