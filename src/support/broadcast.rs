//! Scalar/sequence broadcasting for vectorized evaluation.
//!
//! Query arguments may each be a single value or an ordered sequence.
//! [`normalize`] and [`zip3`] bring a set of such arguments to a common
//! shape using one rule:
//!
//! - if every argument is a scalar, the result stays scalar;
//! - otherwise every sequence must have the same length `L`,
//!   and scalars are repeated `L` times.
//!
//! Sequences of differing length produce a [`ShapeMismatch`].
//!
//! ```
//! use well_test_models::support::broadcast::{Broadcast, zip3};
//!
//! let zipped = zip3(
//!     Broadcast::Scalar(2.0),
//!     Broadcast::Series(vec![1.0, 2.0]),
//!     Broadcast::Scalar(5.0),
//! )
//! .unwrap();
//! assert_eq!(zipped, Broadcast::Series(vec![(2.0, 1.0, 5.0), (2.0, 2.0, 5.0)]));
//! ```

use thiserror::Error;

/// A single value or an ordered sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Broadcast<T> {
    /// A single value, broadcast against any sequence it is combined with.
    Scalar(T),
    /// An ordered sequence of values.
    Series(Vec<T>),
}

/// Sequences combined in one call did not share a length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sequence lengths differ: {lengths:?}")]
pub struct ShapeMismatch {
    /// Lengths of every sequence-valued argument, in argument order.
    pub lengths: Vec<usize>,
}

impl<T> Broadcast<T> {
    /// Returns the sequence length, or `None` for a scalar.
    #[must_use]
    pub fn series_len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Series(values) => Some(values.len()),
        }
    }

    /// Returns the scalar value, or `None` for a sequence.
    #[must_use]
    pub fn into_scalar(self) -> Option<T> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Series(_) => None,
        }
    }

    /// Iterates over the contained values.
    ///
    /// A scalar yields exactly one item.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value).iter(),
            Self::Series(values) => values.iter(),
        }
    }

    /// Consumes the value and returns its items as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Series(values) => values,
        }
    }

    /// Applies `f` to every item, preserving shape.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Broadcast<U> {
        match self {
            Self::Scalar(value) => Broadcast::Scalar(f(value)),
            Self::Series(values) => Broadcast::Series(values.into_iter().map(f).collect()),
        }
    }

    /// Applies a fallible `f` to every item, preserving shape.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<Broadcast<U>, E> {
        match self {
            Self::Scalar(value) => Ok(Broadcast::Scalar(f(value)?)),
            Self::Series(values) => Ok(Broadcast::Series(
                values.into_iter().map(f).collect::<Result<_, _>>()?,
            )),
        }
    }
}

impl<T: Clone> Broadcast<T> {
    /// Expands to a sequence of length `len`.
    ///
    /// Scalars are repeated; sequences are returned as they are.
    /// Callers establish the common length with [`broadcast_len`] first.
    #[must_use]
    pub fn expand(self, len: usize) -> Vec<T> {
        match self {
            Self::Scalar(value) => vec![value; len],
            Self::Series(values) => values,
        }
    }
}

impl<T> From<T> for Broadcast<T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

impl<T> From<Vec<T>> for Broadcast<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Series(values)
    }
}

/// Returns the common sequence length of a set of argument shapes.
///
/// Each shape is `None` for a scalar or `Some(len)` for a sequence.
/// Returns `Ok(None)` when every argument is scalar.
///
/// # Errors
///
/// Returns [`ShapeMismatch`] if two sequences have different lengths.
pub fn broadcast_len(shapes: &[Option<usize>]) -> Result<Option<usize>, ShapeMismatch> {
    let lengths: Vec<usize> = shapes.iter().flatten().copied().collect();

    match lengths.split_first() {
        None => Ok(None),
        Some((&first, rest)) if rest.iter().all(|&len| len == first) => Ok(Some(first)),
        Some(_) => Err(ShapeMismatch { lengths }),
    }
}

/// Normalizes a list of same-typed arguments to a common shape.
///
/// All-scalar input is returned unchanged.
/// Otherwise every argument comes back as a [`Broadcast::Series`] of the
/// common length.
///
/// # Errors
///
/// Returns [`ShapeMismatch`] if two sequences have different lengths.
pub fn normalize<T: Clone>(values: Vec<Broadcast<T>>) -> Result<Vec<Broadcast<T>>, ShapeMismatch> {
    let shapes: Vec<_> = values.iter().map(Broadcast::series_len).collect();

    match broadcast_len(&shapes)? {
        None => Ok(values),
        Some(len) => Ok(values
            .into_iter()
            .map(|value| Broadcast::Series(value.expand(len)))
            .collect()),
    }
}

/// Zips three arguments of possibly different types into one broadcast shape.
///
/// # Errors
///
/// Returns [`ShapeMismatch`] if two sequences have different lengths.
pub fn zip3<A: Clone, B: Clone, C: Clone>(
    a: Broadcast<A>,
    b: Broadcast<B>,
    c: Broadcast<C>,
) -> Result<Broadcast<(A, B, C)>, ShapeMismatch> {
    let shapes = [a.series_len(), b.series_len(), c.series_len()];

    match broadcast_len(&shapes)? {
        None => match (a, b, c) {
            (Broadcast::Scalar(a), Broadcast::Scalar(b), Broadcast::Scalar(c)) => {
                Ok(Broadcast::Scalar((a, b, c)))
            }
            _ => unreachable!("no sequence lengths means every argument is scalar"),
        },
        Some(len) => Ok(Broadcast::Series(
            a.expand(len)
                .into_iter()
                .zip(b.expand(len))
                .zip(c.expand(len))
                .map(|((a, b), c)| (a, b, c))
                .collect(),
        )),
    }
}
