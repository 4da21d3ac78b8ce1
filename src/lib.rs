//! `simplesort` is a collection of classical in-place sorting algorithms:
//! bubble sort, insertion sort, selection sort, quicksort, and a decimal
//! radix sort built from counting sort passes.
//!
//! The comparison sorts take an ordering predicate `is_less(a, b)`, which
//! returns `true` if `a` must be placed before `b`. Passing `|a, b| a < b`
//! sorts ascending, `|a, b| a > b` sorts descending. The predicate is a
//! generic parameter, so every call is statically dispatched.
//!
//! | algorithm            | best       | worst      | stable | allocates     |
//! |----------------------|------------|------------|--------|---------------|
//! | [`bubble_sort`]      | `O(n)`     | `O(n²)`    | yes    | no            |
//! | [`insertion_sort`]   | `O(n)`     | `O(n²)`    | yes    | no            |
//! | [`selection_sort`]   | `O(n²)`    | `O(n²)`    | no     | no            |
//! | [`quicksort`]        | `O(n log n)` | `O(n²)`  | no     | work-list     |
//! | [`radix_sort`]       | `O(d n)`   | `O(d n)`   | yes    | `n` per pass  |
//!
//! where `d` is the number of decimal digits of the largest key.
//!
//! All functions operate on slices, so the sequence length is always the
//! length of the slice. The comparison sorts move elements exclusively
//! through [`swap`]: if the predicate panics, the slice still holds exactly
//! the elements it was called with.
//!
//! Radix sort extracts decimal digits from the key, `(key / 10^place) % 10`,
//! and is therefore restricted to non-negative integer keys. Empty slices and
//! negative keys are rejected with an [`Error`] before the slice is modified.
//!
//! Uses `#![no_std]`, but needs an allocator for [`quicksort`] and the radix
//! sorts.
//!
//! # Examples
//!
//! ```rust
//! let mut data = [5, 3, 8, 1];
//!
//! simplesort::insertion_sort(&mut data, |a, b| a < b);
//!
//! assert_eq!(data, [1, 3, 5, 8]);
//! ```
//!
//! ```rust
//! let mut data = [170u32, 45, 75, 90, 802, 24, 2, 66];
//!
//! simplesort::radix_sort(&mut data)?;
//!
//! assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
//! # Ok::<(), simplesort::Error>(())
//! ```

#![no_std]

extern crate alloc;

mod comparison;
mod error;
mod quicksort;
mod radix;
mod scratch;
mod swap;

pub use crate::error::Error;
pub use crate::radix::Digits;
pub use crate::swap::{swap, xor_swap, XorSwap};

/// Sorts the slice with bubble sort.
///
/// Adjacent out-of-order pairs are swapped in repeated left-to-right passes.
/// Each pass ends where the previous one last swapped, since everything past
/// that point is already in its final position.
///
/// Stable, `O(n)` for an already sorted slice and `O(n²)` in the worst case.
/// Does not allocate.
///
/// # Examples
///
/// ```rust
/// let mut data = ["delta", "alpha", "charlie", "bravo"];
///
/// simplesort::bubble_sort(&mut data, |a, b| a < b);
///
/// assert_eq!(data, ["alpha", "bravo", "charlie", "delta"]);
/// ```
pub fn bubble_sort<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    comparison::bubble(slice, &mut is_less);
}

/// Sorts the slice with insertion sort.
///
/// Every element is swapped towards the front until its left neighbor does
/// not have to precede it.
///
/// Stable for a strict predicate (`<` rather than `<=`), `O(n)` for an
/// already sorted slice and `O(n²)` in the worst case. Does not allocate.
///
/// # Examples
///
/// ```rust
/// let mut data = [3, -7, 2, 0];
///
/// // Sort by absolute value.
/// simplesort::insertion_sort(&mut data, |a: &i32, b: &i32| a.abs() < b.abs());
///
/// assert_eq!(data, [0, 2, 3, -7]);
/// ```
pub fn insertion_sort<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    comparison::insertion(slice, &mut is_less);
}

/// Sorts the slice with selection sort.
///
/// For every position, the remaining unsorted part is scanned for the
/// element that must come first, which is then swapped into place.
///
/// Not stable. `O(n²)` comparisons regardless of the input order, but at most
/// `n - 1` swaps. Does not allocate.
///
/// # Examples
///
/// ```rust
/// let mut data = [2, 9, 4, 7];
///
/// simplesort::selection_sort(&mut data, |a, b| a > b);
///
/// assert_eq!(data, [9, 7, 4, 2]);
/// ```
pub fn selection_sort<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    comparison::selection(slice, &mut is_less);
}

/// Partitions the slice around its first element and returns the index the
/// pivot ends up at.
///
/// After the call, every element before the returned index satisfies
/// `is_less(element, pivot)` and no element after it does. To partition the
/// inclusive range `start..=end` of a larger slice, pass
/// `&mut slice[start..=end]` and add `start` to the result.
///
/// Returns 0 for an empty slice.
///
/// # Examples
///
/// ```rust
/// let mut data = [5, 8, 1, 9, 3];
///
/// let pivot = simplesort::partition(&mut data, |a, b| a < b);
///
/// assert_eq!(pivot, 2);
/// assert_eq!(data[pivot], 5);
/// assert!(data[..pivot].iter().all(|&x| x < 5));
/// assert!(data[pivot + 1..].iter().all(|&x| x >= 5));
/// ```
pub fn partition<T, F>(slice: &mut [T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort::partition(slice, &mut is_less)
}

/// Sorts the slice with quicksort, using the first element of each range as
/// the pivot.
///
/// Sub-ranges waiting to be sorted are kept on an explicit work-list instead
/// of the call stack, so already sorted or reverse sorted input, the worst
/// case for this pivot choice, degrades to `O(n²)` time but never overflows
/// the stack.
///
/// Not stable. `O(n log n)` on average.
///
/// # Examples
///
/// ```rust
/// let mut data = [9, 1, 1, 9, 1];
///
/// simplesort::quicksort(&mut data, |a, b| a > b);
///
/// assert_eq!(data, [9, 9, 1, 1, 1]);
/// ```
pub fn quicksort<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort::quicksort(slice, &mut is_less);
}

/// Returns the greatest element of the slice under its natural ordering.
///
/// When several elements compare equal to the maximum, the first one is
/// returned. Incomparable elements (`NaN`) never replace the running maximum.
///
/// # Errors
///
/// Returns [`Error::EmptySlice`] if the slice is empty.
///
/// # Examples
///
/// ```rust
/// assert_eq!(simplesort::max_value(&[3, 17, 5]), Ok(17));
/// assert_eq!(simplesort::max_value::<u8>(&[]), Err(simplesort::Error::EmptySlice));
/// ```
pub fn max_value<T>(slice: &[T]) -> Result<T, Error>
where
    T: PartialOrd + Copy,
{
    radix::running_max(slice.iter().copied()).ok_or(Error::EmptySlice)
}

/// Sorts the slice of non-negative integers with a decimal radix sort.
///
/// Performs one stable counting sort pass for each decimal digit of the
/// largest value, from the least significant digit up.
///
/// `O(d n)`, where `d` is the number of decimal digits of the largest value.
/// Allocates temporary storage the size of the slice for every pass.
///
/// # Errors
///
/// Returns [`Error::EmptySlice`] for an empty slice and
/// [`Error::NegativeKey`] if the slice contains a negative value. In both
/// cases the slice is not modified.
///
/// # Examples
///
/// ```rust
/// let mut data = [170i32, 45, 75, 90, 802, 24, 2, 66];
///
/// simplesort::radix_sort(&mut data)?;
///
/// assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
///
/// let mut negative = [3i32, -1];
/// assert_eq!(
///     simplesort::radix_sort(&mut negative),
///     Err(simplesort::Error::NegativeKey { index: 1 })
/// );
/// # Ok::<(), simplesort::Error>(())
/// ```
pub fn radix_sort<T: Digits>(slice: &mut [T]) -> Result<(), Error> {
    radix::sort_by_key(slice, |v| *v)
}

/// Sorts the slice with a decimal radix sort, using a key extraction
/// function.
///
/// The sort is stable: elements with equal keys keep their relative order.
/// The key function is called several times for every element, `O(d n)`
/// times in total.
///
/// # Errors
///
/// Returns [`Error::EmptySlice`] for an empty slice and
/// [`Error::NegativeKey`] if the key function returns a negative key. In both
/// cases the slice is not modified.
///
/// # Panics
///
/// Can panic if the key function returns different keys for the same element
/// when called repeatedly. The panic is on a best-effort basis. In case of
/// panic, the slice holds the same elements as before, in unspecified order.
///
/// # Examples
///
/// ```rust
/// let mut orders = [("pears", 12u32), ("apples", 3), ("plums", 12), ("figs", 7)];
///
/// simplesort::radix_sort_by_key(&mut orders, |o| o.1)?;
///
/// assert_eq!(orders, [("apples", 3), ("figs", 7), ("pears", 12), ("plums", 12)]);
/// # Ok::<(), simplesort::Error>(())
/// ```
pub fn radix_sort_by_key<T, K, F>(slice: &mut [T], key_fn: F) -> Result<(), Error>
where
    T: Clone,
    K: Digits,
    F: FnMut(&T) -> K,
{
    radix::sort_by_key(slice, key_fn)
}

/// Performs a single stable counting sort pass, ordering the slice by the
/// decimal digit `(key / 10^place) % 10` of every key.
///
/// This is one step of [`radix_sort_by_key`]. An empty slice is left as is.
///
/// # Errors
///
/// Returns [`Error::NegativeKey`] if the key function returns a negative key,
/// without modifying the slice.
///
/// # Panics
///
/// Can panic if the key function returns different keys for the same element
/// when called repeatedly, see [`radix_sort_by_key`].
///
/// # Examples
///
/// ```rust
/// let mut data = [31u32, 22, 13, 41, 52];
///
/// // Order by the tens digit only, ties keep their order.
/// simplesort::counting_sort_by_digit(&mut data, 1, |v| *v)?;
///
/// assert_eq!(data, [13, 22, 31, 41, 52]);
///
/// // Order by the ones digit only.
/// simplesort::counting_sort_by_digit(&mut data, 0, |v| *v)?;
///
/// assert_eq!(data, [31, 41, 22, 52, 13]);
/// # Ok::<(), simplesort::Error>(())
/// ```
pub fn counting_sort_by_digit<T, K, F>(slice: &mut [T], place: u32, key_fn: F) -> Result<(), Error>
where
    T: Clone,
    K: Digits,
    F: FnMut(&T) -> K,
{
    radix::counting_sort_by_digit(slice, place, key_fn)
}
