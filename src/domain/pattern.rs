//! Exact-shape path patterns.
//!
//! The role rules and the deep-link target predicate are ordered tables
//! over these patterns, so rule priority and coverage can be tested on
//! their own instead of hiding inside a chain of string checks.

use super::CanonicalPath;

/// One segment of a path shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Matches this literal segment exactly.
    Lit(&'static str),
    /// Matches any single segment.
    Param,
}

/// An exact-length path shape such as `/listings/<id>/settings`.
///
/// Matching is segment-for-segment: a two-segment pattern never matches a
/// three-segment path, which is what keeps `/listings/<id>` (detail) and
/// `/listings/<id>/settings` (settings) in different rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPattern {
    segments: &'static [Segment],
}

impl PathPattern {
    /// A pattern over the given segment shapes.
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// Whether `path` matches this shape exactly.
    pub fn matches(&self, path: &CanonicalPath) -> bool {
        let mut actual = path.segments();
        for expected in self.segments {
            let Some(segment) = actual.next() else {
                return false;
            };
            if let Segment::Lit(lit) = expected {
                if segment != *lit {
                    return false;
                }
            }
        }
        actual.next().is_none()
    }

    /// The `Param` capture if `path` matches, `None` otherwise.
    ///
    /// With several `Param` segments the last capture wins; every pattern
    /// in this crate has at most one.
    pub fn capture<'p>(&self, path: &'p CanonicalPath) -> Option<&'p str> {
        let mut actual = path.segments();
        let mut captured = None;
        for expected in self.segments {
            let segment = actual.next()?;
            match expected {
                Segment::Lit(lit) => {
                    if segment != *lit {
                        return None;
                    }
                }
                Segment::Param => captured = Some(segment),
            }
        }
        if actual.next().is_none() { captured } else { None }
    }
}
