//! Element exchange primitives shared by the comparison sorts.

/// Swaps the elements at positions `a` and `b`.
///
/// Swapping a position with itself leaves the slice untouched.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
#[inline(always)]
pub fn swap<T>(v: &mut [T], a: usize, b: usize) {
    if a != b {
        v.swap(a, b);
    }
}

/// Swaps the elements at positions `a` and `b` without a temporary, using
/// three exclusive-or assignments.
///
/// Only available for integers and Booleans, see [`XorSwap`]. Swapping a
/// position with itself leaves the slice untouched; without that check the
/// value would be xor-ed with itself and cleared.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
///
/// # Examples
///
/// ```rust
/// let mut data = [1u8, 2, 3];
///
/// simplesort::xor_swap(&mut data, 0, 2);
/// simplesort::xor_swap(&mut data, 1, 1);
///
/// assert_eq!(data, [3, 2, 1]);
/// ```
#[inline]
pub fn xor_swap<T: XorSwap>(v: &mut [T], a: usize, b: usize) {
    if a == b {
        assert!(a < v.len(), "index {} out of bounds for length {}", a, v.len());
        return;
    }
    let (x, y) = (v[a], v[b]);
    let x = x.xor(y);
    let y = y.xor(x);
    let x = x.xor(y);
    v[a] = x;
    v[b] = y;
}

/// Types whose values can be exchanged with [`xor_swap`].
///
/// Implemented for all integer types and `bool`.
pub trait XorSwap: Copy + private::Sealed {
    #[doc(hidden)]
    fn xor(self, other: Self) -> Self;
}

macro_rules! impl_xor_swap { ($($t:ty)*) => ($(
    impl XorSwap for $t {
        #[inline(always)]
        fn xor(self, other: Self) -> Self {
            self ^ other
        }
    }
)*) }

impl_xor_swap! {
    bool
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
}

mod private {
    /// Seals `XorSwap`, only types with a lossless `^` may implement it.
    pub trait Sealed {}
    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }
    sealed_impl! {
        bool
        u8 u16 u32 u64 u128 usize
        i8 i16 i32 i64 i128 isize
    }
}
