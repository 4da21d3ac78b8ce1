//! Decimal LSD radix sort built from stable counting sort passes.

use crate::{error::Error, scratch::ScratchBuffer};

/// Number of buckets in one pass, one per decimal digit.
const RADIX: usize = 10;

/// Returns the greatest item produced by `iter` under `>`, keeping the first
/// one encountered on ties.
pub(crate) fn running_max<K, I>(iter: I) -> Option<K>
where
    K: PartialOrd,
    I: IntoIterator<Item = K>,
{
    let mut iter = iter.into_iter();
    let mut max = iter.next()?;
    for k in iter {
        if k > max {
            max = k;
        }
    }
    Some(max)
}

/// Rejects the first negative key, digit extraction is undefined for it.
fn check_non_negative<T, K, F>(v: &[T], key_fn: &mut F) -> Result<(), Error>
where
    K: Digits,
    F: FnMut(&T) -> K,
{
    match v.iter().position(|t| key_fn(t).is_negative()) {
        Some(index) => Err(Error::NegativeKey { index }),
        None => Ok(()),
    }
}

pub(crate) fn sort_by_key<T, K, F>(v: &mut [T], mut key_fn: F) -> Result<(), Error>
where
    T: Clone,
    K: Digits,
    F: FnMut(&T) -> K,
{
    if v.is_empty() {
        return Err(Error::EmptySlice);
    }
    check_non_negative(v, &mut key_fn)?;

    let max = running_max(v.iter().map(&mut key_fn)).ok_or(Error::EmptySlice)?;

    // `max / 10^place > 0` for every place that needs a pass. Places whose
    // power of ten overflows the key type can't hold a digit.
    let passes = (0..).take_while(|&place| max.has_place(place)).count() as u32;

    log::debug!("radix sort of {} elements, {} digit passes", v.len(), passes);

    for place in 0..passes {
        sort_by_digit(v, place, &mut key_fn);
    }

    Ok(())
}

pub(crate) fn counting_sort_by_digit<T, K, F>(
    v: &mut [T],
    place: u32,
    mut key_fn: F,
) -> Result<(), Error>
where
    T: Clone,
    K: Digits,
    F: FnMut(&T) -> K,
{
    check_non_negative(v, &mut key_fn)?;
    sort_by_digit(v, place, &mut key_fn);
    Ok(())
}

/// Sorts the slice by the decimal digit at `place` of each key. The sort is
/// stable.
///
/// # Panics
///
/// Panics if the key function returned different keys for the same element,
/// detected when a slot of the scratch buffer was never filled. The slice is
/// not written to in that case.
fn sort_by_digit<T, K, F>(v: &mut [T], place: u32, key_fn: &mut F)
where
    T: Clone,
    K: Digits,
    F: FnMut(&T) -> K,
{
    log::trace!("counting sort pass over {} elements, digit place {}", v.len(), place);

    let mut bucket_sizes = [0usize; RADIX];
    for t in v.iter() {
        bucket_sizes[key_fn(t).digit(place)] += 1;
    }

    let mut bucket_ends = bucket_sizes_to_ends(bucket_sizes);

    let mut scratch = ScratchBuffer::new(v.len());

    // Right to left, each bucket fills from its end, so equal digits keep
    // their relative order.
    scratch.scatter_rev(v, |t| {
        let end = &mut bucket_ends[key_fn(t).digit(place)];
        *end = end.checked_sub(1)?;
        Some(*end)
    });

    if scratch.commit(v).is_err() {
        panic!(
            "The key function is not reliable: when called repeatedly, \
            it returned different keys for the same element."
        )
    }
}

/// Turns the histogram into a prefix sum, giving the one-past-last index of
/// every bucket.
///
/// ```plaintext
/// Sizes:     |---b0---|-b1-|---b2---|
/// Ends:               b0   b0+b1    b0+b1+b2
/// ```
fn bucket_sizes_to_ends(mut sizes: [usize; RADIX]) -> [usize; RADIX] {
    let mut acc = 0;
    for size in sizes.iter_mut() {
        acc += *size;
        *size = acc;
    }
    sizes
}

/// Integer types which can be sorted by their decimal digits.
///
/// Implemented for all built-in integer types. Signed types are accepted, but
/// only non-negative values can be sorted: a negative value makes the sort
/// return [`Error::NegativeKey`].
pub trait Digits: Copy + PartialOrd + private::Sealed {
    /// Returns `true` if the value is below zero.
    #[doc(hidden)]
    fn is_negative(self) -> bool;

    /// Returns `(self / 10^place) % 10`, zero if `10^place` doesn't fit the
    /// type. Only meaningful for non-negative values.
    #[doc(hidden)]
    fn digit(self, place: u32) -> usize;

    /// Returns `true` if `self / 10^place > 0`.
    #[doc(hidden)]
    fn has_place(self, place: u32) -> bool;
}

macro_rules! impl_digits {
    (@places $t:ty) => {
        #[inline(always)]
        fn digit(self, place: u32) -> usize {
            match (10 as $t).checked_pow(place) {
                Some(exp) => ((self / exp) % 10) as usize,
                None => 0,
            }
        }

        #[inline(always)]
        fn has_place(self, place: u32) -> bool {
            match (10 as $t).checked_pow(place) {
                Some(exp) => self / exp > 0,
                None => false,
            }
        }
    };
    (unsigned $($t:ty)*) => ($(
        impl Digits for $t {
            #[inline(always)]
            fn is_negative(self) -> bool {
                false
            }

            impl_digits!(@places $t);
        }
    )*);
    (signed $($t:ty)*) => ($(
        impl Digits for $t {
            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            impl_digits!(@places $t);
        }
    )*);
}

impl_digits! { unsigned u8 u16 u32 u64 u128 usize }
impl_digits! { signed i8 i16 i32 i64 i128 isize }

mod private {
    /// This trait serves as a seal for the `Digits` trait to prevent
    /// downstream implementations.
    pub trait Sealed {}
    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }
    sealed_impl! {
        u8 u16 u32 u64 u128 usize
        i8 i16 i32 i64 i128 isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(802u32.digit(0), 2);
        assert_eq!(802u32.digit(1), 0);
        assert_eq!(802u32.digit(2), 8);
        assert_eq!(802u32.digit(3), 0);
        assert_eq!(255u8.digit(2), 2);
        assert_eq!(255u8.digit(3), 0);
        assert_eq!(u128::MAX.digit(38), 3);
        assert_eq!(u128::MAX.digit(39), 0);
    }

    #[test]
    fn places() {
        assert!(!0u32.has_place(0));
        assert!(9u32.has_place(0));
        assert!(!9u32.has_place(1));
        assert!(10i64.has_place(1));
        assert!(255u8.has_place(2));
        assert!(!255u8.has_place(3));
        assert!(!i8::MAX.has_place(3));
    }

    #[test]
    fn negative() {
        assert!((-1i32).is_negative());
        assert!(!0i32.is_negative());
        assert!(!u64::MAX.is_negative());
    }

    #[test]
    fn bucket_ends_are_prefix_sums() {
        let ends = bucket_sizes_to_ends([1, 0, 2, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(ends, [1, 1, 3, 3, 3, 3, 3, 3, 3, 6]);
    }

    #[test]
    fn running_max_of_keys() {
        let v = [(1, 'a'), (3, 'b'), (3, 'c'), (2, 'd')];
        let max = running_max(v.iter().map(|p| p.0));
        assert_eq!(max, Some(3));
        assert_eq!(running_max(core::iter::empty::<u8>()), None);
    }

    #[test]
    fn single_pass_is_stable() {
        let mut v = [(21u32, 'a'), (13, 'b'), (11, 'c'), (23, 'd'), (10, 'e')];
        sort_by_digit(&mut v, 0, &mut |p: &(u32, char)| p.0);
        assert_eq!(v, [(10, 'e'), (21, 'a'), (11, 'c'), (13, 'b'), (23, 'd')]);
    }

    #[test]
    fn all_zero_keys_need_no_pass() {
        let mut v = [0u16, 0, 0];
        assert_eq!(sort_by_key(&mut v, |k| *k), Ok(()));
        assert_eq!(v, [0, 0, 0]);
    }
}
