//! Lazy sequences
//!
//! A [`Lazy`] sequence computes its elements on demand and can be traversed only once. If the
//! elements are needed more than once, [materialize](Lazy::materialize) them first.

use std::{fmt, iter::FusedIterator};

/// Finite, single-pass sequence produced by a generator function
///
/// Once the generator returns `None` it is dropped and never called again.
pub struct Lazy<F> {
    generator: Option<F>,
    produced: usize,
}

impl<T, F> Lazy<F>
where
    F: FnMut() -> Option<T>,
{
    /// Construct sequence that calls `generator` for every element
    pub const fn new(generator: F) -> Self {
        Lazy {
            generator: Some(generator),
            produced: 0,
        }
    }

    /// Number of elements pulled so far
    pub const fn produced(&self) -> usize {
        self.produced
    }

    /// Check if the generator already signalled the end of the sequence
    pub const fn is_exhausted(&self) -> bool {
        self.generator.is_none()
    }

    /// Compute all remaining elements and store them in a repeatable container
    pub fn materialize(self) -> Materialized<T> {
        Materialized(self.collect())
    }
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("produced", &self.produced)
            .field("exhausted", &self.generator.is_none())
            .finish()
    }
}

impl<T, F> Iterator for Lazy<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let generator = self.generator.as_mut()?;
        if let Some(value) = generator() {
            self.produced += 1;
            Some(value)
        } else {
            self.generator = None;
            None
        }
    }
}

impl<T, F> FusedIterator for Lazy<F> where F: FnMut() -> Option<T> {}

/// Lazy sequence of squares `0, 1, 4, ..., (n - 1)^2`
pub fn squares(n: u64) -> Lazy<impl FnMut() -> Option<u64>> {
    let mut next = 0;
    Lazy::new(move || {
        if next < n {
            let square = next * next;
            next += 1;
            Some(square)
        } else {
            None
        }
    })
}

/// Elements of a sequence stored in order, traversable any number of times
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Materialized<T>(Vec<T>);

impl<T> Materialized<T> {
    #[allow(missing_docs)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[allow(missing_docs)]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(missing_docs)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[allow(missing_docs)]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> FromIterator<T> for Materialized<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Materialized(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Materialized<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
