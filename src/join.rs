use log::trace;

use crate::segment::{Segments, Separator};

impl Separator {
    /// Merge `addition` onto `base`, splicing at a shared anchor component.
    ///
    /// `base` is scanned from its last component towards its first for the
    /// first component of `addition`. On the rightmost match at index `i`
    /// the result is `base[..i]` followed by all of `addition`. Without a
    /// match the two are concatenated like an ordinary join, and an absolute
    /// `addition` contributes its names but not its leading separator.
    ///
    /// ```rust
    /// use pathkit::Separator;
    ///
    /// let sep = Separator::new('/');
    /// assert_eq!(sep.merge("/a/b/c/e", "b/d"), "/a/b/d");
    /// assert_eq!(sep.merge("/a/b/c", "d"), "/a/b/c/d");
    /// assert_eq!(sep.merge("/a/b/c", "/d"), "/d");
    /// ```
    pub fn merge(&self, base: &str, addition: &str) -> String {
        self.merge_segments(&self.split(base), &self.split(addition))
            .render(*self)
    }

    pub(crate) fn merge_segments(&self, base: &Segments, addition: &Segments) -> Segments {
        let Some(anchor) = addition.components().first() else {
            return base.clone();
        };

        let head = base.components();
        // Rightmost match wins; keep this an explicit index loop.
        let mut i = head.len();
        while i > 0 {
            i -= 1;
            if head[i] == *anchor {
                trace!("merge: anchor {anchor:?} at base index {i}");
                let mut spliced = head[..i].to_vec();
                spliced.extend_from_slice(addition.components());
                return Segments::from_components(spliced);
            }
        }

        let mut joined = head.to_vec();
        joined.extend_from_slice(addition.names());
        Segments::from_components(joined)
    }

    /// Fold `elems` left to right through [`merge`](Separator::merge).
    ///
    /// No elements yields the empty string; a single element is returned
    /// unchanged.
    pub fn join<I, S>(&self, elems: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = elems.into_iter();
        let Some(first) = iter.next() else {
            return String::new();
        };
        let first = first.as_ref();

        let mut acc: Option<Segments> = None;
        for e in iter {
            let base = acc.unwrap_or_else(|| self.split(first));
            acc = Some(self.merge_segments(&base, &self.split(e.as_ref())));
        }

        match acc {
            Some(acc) => acc.render(*self),
            None      => first.to_owned(),
        }
    }
}

/// Merge two paths on the platform separator. See [`Separator::merge`].
pub fn merge(base: &str, addition: &str) -> String {
    Separator::default().merge(base, addition)
}

/// Join paths on the platform separator. See [`Separator::join`].
pub fn join<I, S>(elems: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Separator::default().join(elems)
}
