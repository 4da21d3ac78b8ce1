//! Quadratic comparison sorts: bubble, insertion and selection sort.
//!
//! All three only ever compare through `is_less` and move elements through
//! [`swap`], so a panicking predicate leaves the slice a permutation of the
//! input.

use crate::swap::swap;

/// Bubble sort with a shrinking scan bound.
///
/// Everything past the last swap of a pass is already in its final place, so
/// the next pass stops there. A pass without swaps ends the sort.
pub(crate) fn bubble<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // `saturating_sub` keeps the empty slice from underflowing the bound.
    let mut bound = v.len().saturating_sub(1);

    while bound != 0 {
        let mut last_swap = 0;
        for i in 0..bound {
            if is_less(&v[i + 1], &v[i]) {
                swap(v, i, i + 1);
                last_swap = i;
            }
        }
        bound = last_swap;
    }
}

/// Insertion sort, moving each element left by adjacent swaps.
pub(crate) fn insertion<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            swap(v, j, j - 1);
            j -= 1;
        }
    }
}

/// Selection sort. Always scans the full unsorted suffix.
pub(crate) fn selection<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        if min != i {
            swap(v, i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Less = fn(&i32, &i32) -> bool;
    type Sort = fn(&mut [i32], &mut Less);

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [i32; 0] = [];
        bubble(&mut empty, &mut lt);
        insertion(&mut empty, &mut lt);
        selection(&mut empty, &mut lt);

        let mut one = [42];
        bubble(&mut one, &mut lt);
        insertion(&mut one, &mut lt);
        selection(&mut one, &mut lt);
        assert_eq!(one, [42]);
    }

    #[test]
    fn small_input() {
        let sorts: [Sort; 3] = [bubble, insertion, selection];
        for sort in sorts {
            let mut v = [5, 3, 8, 1];
            sort(&mut v, &mut (lt as Less));
            assert_eq!(v, [1, 3, 5, 8]);
        }
    }

    #[test]
    fn bubble_sorted_input_is_linear() {
        let mut v = [1, 2, 3, 4, 5];
        let mut comparisons = 0;
        bubble(&mut v, &mut |a: &i32, b: &i32| {
            comparisons += 1;
            a < b
        });
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(comparisons, 4);
    }

    #[test]
    fn insertion_sorted_input_is_linear() {
        let mut v = [1, 2, 3, 4, 5];
        let mut comparisons = 0;
        insertion(&mut v, &mut |a: &i32, b: &i32| {
            comparisons += 1;
            a < b
        });
        assert_eq!(comparisons, 4);
    }

    #[test]
    fn selection_always_scans_everything() {
        let mut v = [1, 2, 3, 4, 5];
        let mut comparisons = 0;
        selection(&mut v, &mut |a: &i32, b: &i32| {
            comparisons += 1;
            a < b
        });
        // n * (n - 1) / 2
        assert_eq!(comparisons, 10);
    }

    #[test]
    fn bubble_bound_shrinks_past_last_swap() {
        // One pass moves 9 to the end with the last swap at index 3, the
        // second pass only has to look at the first three pairs.
        let mut v = [2, 1, 3, 9, 4];
        let mut comparisons = 0;
        bubble(&mut v, &mut |a: &i32, b: &i32| {
            comparisons += 1;
            a < b
        });
        assert_eq!(v, [1, 2, 3, 4, 9]);
        assert_eq!(comparisons, 4 + 3);
    }

    #[test]
    fn descending_predicate() {
        let mut v = [3, 9, 1, 7];
        insertion(&mut v, &mut |a: &i32, b: &i32| a > b);
        assert_eq!(v, [9, 7, 3, 1]);
    }
}
