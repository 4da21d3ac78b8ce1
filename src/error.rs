//! Error type for the operations that can reject their input.

/// Conditions under which [`max_value`] and the radix sorts refuse to run.
///
/// The comparison sorts never fail: an empty or single-element slice is
/// already sorted.
///
/// Radix sorts validate the whole slice before touching it, so when one of
/// these is returned the slice is left exactly as it was passed in.
///
/// [`max_value`]: crate::max_value
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The slice has no elements, so there is no maximum to extract digits
    /// from.
    #[error("cannot take the maximum of an empty slice")]
    EmptySlice,
    /// Decimal digit extraction is undefined for negative numbers.
    #[error("radix sort only supports non-negative keys, found a negative key at index {index}")]
    NegativeKey { index: usize },
}
