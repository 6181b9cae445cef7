// ---------------------------------------------------------------------------
// Separator
// ---------------------------------------------------------------------------

/// The separator character substituted throughout path splitting, merging
/// and joining.
///
/// Defaults to the platform separator ([`std::path::MAIN_SEPARATOR`]). Use
/// [`Separator::new`] to work with foreign paths, e.g. `/`-separated module
/// paths on a platform whose native separator differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Separator(char);

impl Default for Separator {
    fn default() -> Self {
        Self(std::path::MAIN_SEPARATOR)
    }
}

impl Separator {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Split `path` into its components.
    ///
    /// An absolute path (one starting with the separator) keeps a leading
    /// empty component as its absoluteness marker. Empty tokens elsewhere
    /// (doubled or trailing separators) are dropped.
    pub fn split(&self, path: &str) -> Segments {
        let absolute = path.starts_with(self.0);
        let mut components = Vec::new();
        if absolute {
            components.push(String::new());
        }
        components.extend(
            path.split(self.0)
                .filter(|c| !c.is_empty())
                .map(str::to_owned),
        );
        Segments { components, absolute }
    }

    /// Rejoin `components` into a path string, emitting a leading separator
    /// when `absolute` is set.
    ///
    /// A leading absoluteness marker in `components` is consumed rather than
    /// rendered twice.
    pub fn render<S: AsRef<str>>(&self, components: &[S], absolute: bool) -> String {
        let body = match components.first() {
            Some(first) if first.as_ref().is_empty() => &components[1..],
            _ => components,
        };

        let mut out = String::new();
        if absolute {
            out.push(self.0);
        }
        for (i, c) in body.iter().enumerate() {
            if i > 0 {
                out.push(self.0);
            }
            out.push_str(c.as_ref());
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// A parsed path: ordered components plus the absoluteness flag.
///
/// Produced by [`Separator::split`]. Components never contain the separator;
/// the only empty component is the leading marker of an absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    components: Vec<String>,
    absolute:   bool,
}

impl Segments {
    /// Build from raw components. Absoluteness follows the leading marker.
    pub(crate) fn from_components(components: Vec<String>) -> Self {
        let absolute = components.first().is_some_and(|c| c.is_empty());
        Self { components, absolute }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components after the absoluteness marker.
    pub fn names(&self) -> &[String] {
        if self.absolute {
            &self.components[1..]
        } else {
            &self.components
        }
    }

    pub fn render(&self, sep: Separator) -> String {
        sep.render(&self.components, self.absolute)
    }

    /// The parent directory, or `None` at a terminal: the root of an
    /// absolute path, or `.` or a run of `..` for a relative one.
    ///
    /// `.` and `..` are resolved lexically first, so the result is always a
    /// real ancestor. A relative path with one name ascends to `.`.
    pub(crate) fn parent(&self) -> Option<Segments> {
        let mut names = self.cleaned_names();
        // Nothing left, or only `..`: what lies above is unknown lexically.
        if names.last().is_none_or(|n| n == "..") {
            return None;
        }

        names.pop();
        if names.is_empty() && !self.absolute {
            names.push(".".to_owned());
        }
        Some(self.with_names(names))
    }

    /// The same path with `.` and `..` resolved lexically.
    pub(crate) fn normalized(&self) -> Segments {
        let names = self.cleaned_names();
        if names.is_empty() && !self.absolute {
            return Self::from_components(vec![".".to_owned()]);
        }
        self.with_names(names)
    }

    fn with_names(&self, mut names: Vec<String>) -> Segments {
        if self.absolute {
            names.insert(0, String::new());
        }
        Self::from_components(names)
    }

    /// Names with `.` dropped and each `..` cancelling the name before it.
    /// Leading `..` survive on relative paths and vanish at an absolute root.
    fn cleaned_names(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for name in self.names() {
            match name.as_str() {
                "." => {}
                ".." => match out.last() {
                    Some(prev) if prev != ".." => {
                        out.pop();
                    }
                    _ if self.absolute => {}
                    _ => out.push(name.clone()),
                },
                _ => out.push(name.clone()),
            }
        }
        out
    }

    /// Append a single child name without anchor matching.
    pub(crate) fn child(&self, name: &str) -> Segments {
        let mut components = match self.names() {
            [only] if !self.absolute && only == "." => Vec::new(),
            _ => self.components.clone(),
        };
        components.push(name.to_owned());
        Self::from_components(components)
    }
}

// ---------------------------------------------------------------------------
// Free functions over the default separator
// ---------------------------------------------------------------------------

/// Split `path` on the platform separator. See [`Separator::split`].
pub fn split(path: &str) -> Segments {
    Separator::default().split(path)
}

/// Render components with the platform separator. See [`Separator::render`].
pub fn render<S: AsRef<str>>(components: &[S], absolute: bool) -> String {
    Separator::default().render(components, absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLASH: Separator = Separator::new('/');

    #[test]
    fn absolute_path_keeps_marker() {
        let s = SLASH.split("/a/b");
        assert!(s.is_absolute());
        assert_eq!(s.components(), ["", "a", "b"]);
        assert_eq!(s.names(), ["a", "b"]);
    }

    #[test]
    fn relative_path_has_no_marker() {
        let s = SLASH.split("a/b/c.txt");
        assert!(!s.is_absolute());
        assert_eq!(s.components(), ["a", "b", "c.txt"]);
    }

    #[test]
    fn redundant_separators_are_dropped() {
        assert_eq!(SLASH.split("a//b/").components(), ["a", "b"]);
        assert_eq!(SLASH.split("/").components(), [""]);
        assert!(SLASH.split("").is_empty());
    }

    #[test]
    fn render_round_trips() {
        for p in ["/a/b/c", "a/b", "a", "/", "", "/pkg/mod/github.com/x"] {
            let s = SLASH.split(p);
            assert_eq!(SLASH.render(s.components(), s.is_absolute()), p, "round-trip of {p:?}");
        }
    }

    #[test]
    fn render_without_marker_still_honours_absolute() {
        assert_eq!(SLASH.render(&["a", "b"], true), "/a/b");
        assert_eq!(SLASH.render(&["", "a"], false), "a");
    }

    #[test]
    fn parent_stops_at_terminals() {
        let p = SLASH.split("/a").parent().unwrap();
        assert_eq!(p.render(SLASH), "/");
        assert!(p.parent().is_none());

        let p = SLASH.split("a/b").parent().unwrap();
        assert_eq!(p.render(SLASH), "a");
        let p = p.parent().unwrap();
        assert_eq!(p.render(SLASH), ".");
        assert!(p.parent().is_none());
    }

    #[test]
    fn parent_resolves_dot_components() {
        let p = SLASH.split("/a/b/..").parent().unwrap();
        assert_eq!(p.render(SLASH), "/");

        let p = SLASH.split("/a/./b").parent().unwrap();
        assert_eq!(p.render(SLASH), "/a");

        let p = SLASH.split("/..").parent();
        assert!(p.is_none(), "/.. is the root");

        let p = SLASH.split("../x").parent().unwrap();
        assert_eq!(p.render(SLASH), "..");
        assert!(p.parent().is_none());

        let p = SLASH.split("a/..").parent();
        assert!(p.is_none(), "a/.. is the . marker");

        assert_eq!(SLASH.split("/w/./x/../").normalized(), SLASH.split("/w"));
        assert_eq!(SLASH.split("a/..").normalized().render(SLASH), ".");
    }

    #[test]
    fn child_appends_plainly() {
        assert_eq!(SLASH.split("/x/b").child("b").render(SLASH), "/x/b/b");
        assert_eq!(SLASH.split(".").child("f").render(SLASH), "f");
        assert_eq!(SLASH.split("/").child("f").render(SLASH), "/f");
    }

    #[test]
    fn custom_separator() {
        let sep = Separator::new('\\');
        let s = sep.split("\\a\\b");
        assert!(s.is_absolute());
        assert_eq!(s.render(sep), "\\a\\b");
    }
}
