//! Dotted paths addressing locations inside nested maps.

use std::fmt;

/// A sequence of segments addressing a location inside a [`Value`](crate::Value).
///
/// Paths are usually written as dotted strings (`"chat.creative.channel"`),
/// but a pre-split sequence of segments is accepted as well, which is how
/// keys containing a `.` are reached.
///
/// The empty path addresses the root value.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub segments: Vec<String>,
}

impl Path {
    /// The empty (root) path.
    pub fn root() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Parse a dotted path.
    ///
    /// Parsing never fails. The empty string is the root path; every other
    /// string is split on `.` with inner empty segments kept, since `""` is
    /// a perfectly good map key.
    ///
    /// ```rust
    /// use grabbag_core::Path;
    ///
    /// assert_eq!(Path::parse("a.b.c").len(), 3);
    /// assert!(Path::parse("").is_empty());
    /// assert_eq!(&Path::parse("a..b")[1], "");
    /// ```
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Path::root();
        }
        Path {
            segments: s.split('.').map(str::to_string).collect(),
        }
    }

    /// Build a path from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    /// Split into the parent path and the final segment.
    ///
    /// Returns `None` for the root path.
    pub fn split_last(&self) -> Option<(&[String], &String)> {
        self.segments
            .split_last()
            .map(|(last, parent)| (parent, last))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::parse(&s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Path::parse(s)
    }
}

impl From<&Path> for Path {
    fn from(p: &Path) -> Self {
        p.clone()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path { segments }
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        Path::from_segments(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Path::from_segments(segments)
    }
}

/// Macro for writing dotted paths.
///
/// ```rust
/// use grabbag_core::path;
///
/// let p = path!("users.123.name");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}
