//! Quicksort over an explicit work-list of sub-ranges.

use core::ops::Range;

use alloc::vec::Vec;

use crate::swap::swap;

/// Partitions `v` around its first element, returning the final position of
/// that pivot.
///
/// The pivot stays at index 0 while the rest of the slice is scanned, the
/// elements for which `is_less(elem, pivot)` holds are gathered right after
/// it. Finally the pivot is swapped to the end of that region.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let mut pivot_pos = 0;
    for i in 1..len {
        if is_less(&v[i], &v[0]) {
            pivot_pos += 1;
            swap(v, pivot_pos, i);
        }
    }

    // Place the pivot between the two partitions.
    swap(v, 0, pivot_pos);
    pivot_pos
}

/// Sorts `v` by repeatedly partitioning ranges taken from a work-list.
///
/// Of the two sides produced by a partition the larger one is pushed first,
/// so the smaller one is popped next. This keeps the work-list at
/// `O(log len)` entries even when every pivot is the worst possible one, and
/// the call stack does not grow at all.
pub(crate) fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let mut work: Vec<Range<usize>> = Vec::new();
    work.push(0..v.len());
    let mut peak_depth = work.len();

    while let Some(range) = work.pop() {
        // Bounds only: `start < end` on the inclusive range, i.e. at least two
        // elements left.
        if range.start + 1 >= range.end {
            continue;
        }

        let pivot = range.start + partition(&mut v[range.clone()], is_less);

        let left = range.start..pivot;
        let right = (pivot + 1)..range.end;
        if left.len() < right.len() {
            work.push(right);
            work.push(left);
        } else {
            work.push(left);
            work.push(right);
        }
        peak_depth = peak_depth.max(work.len());
    }

    log::trace!("quicksort of {} elements, peak work-list depth {}", v.len(), peak_depth);
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 8, 1, 9, 3, 5, 2];
        let pos = partition(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v[pos], 5);
        assert!(v[..pos].iter().all(|&x| x < 5));
        assert!(v[pos + 1..].iter().all(|&x| x >= 5));
    }

    #[test]
    fn partition_edge_cases() {
        let mut empty: [u8; 0] = [];
        assert_eq!(partition(&mut empty, &mut |a: &u8, b: &u8| a < b), 0);

        let mut smallest_first = [1, 4, 3, 2];
        assert_eq!(partition(&mut smallest_first, &mut |a: &i32, b: &i32| a < b), 0);
        assert_eq!(smallest_first[0], 1);

        let mut largest_first = [9, 4, 3, 2];
        assert_eq!(partition(&mut largest_first, &mut |a: &i32, b: &i32| a < b), 3);
        assert_eq!(largest_first[3], 9);
    }

    #[test]
    fn partition_with_non_strict_predicate() {
        // A `>=` predicate moves pivot-equal values to the front as well.
        let mut v = [4, 4, 7, 1, 4];
        let pos = partition(&mut v, &mut |a: &i32, b: &i32| a >= b);
        assert_eq!(pos, 3);
        assert_eq!(v[pos], 4);
        assert!(v[..pos].iter().all(|&x| x >= 4));
        assert!(v[pos + 1..].iter().all(|&x| x < 4));
    }

    #[test]
    fn descending_with_duplicates() {
        let mut v = [9, 1, 1, 9, 1];
        quicksort(&mut v, &mut |a: &i32, b: &i32| a > b);
        assert_eq!(v, [9, 9, 1, 1, 1]);
    }

    #[test]
    fn ascending_input_worst_case() {
        // Every pivot is the minimum, the recursive formulation would need a
        // call frame per element here.
        let len = 10_000;
        let mut v: Vec<u32> = (0..len).collect();
        let expected = v.clone();
        quicksort(&mut v, &mut |a: &u32, b: &u32| a < b);
        assert_eq!(v, expected);
    }

    #[test]
    fn all_equal() {
        let mut v = vec![4; 64];
        quicksort(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, vec![4; 64]);
    }
}
