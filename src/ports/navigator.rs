use crate::domain::CanonicalPath;

/// Port for driving the host router.
pub trait Navigator {
    /// Replace the current history entry with `path`.
    ///
    /// Replace, never push: a deep-link landing must not leave the
    /// pre-dispatch screen on the back stack.
    fn replace(&self, path: &CanonicalPath);
}
