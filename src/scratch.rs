use alloc::vec::Vec;

/// Scratch buffer for a single counting sort pass. Holds one slot per element
/// of the slice being sorted, elements are scattered into it and then written
/// back in one go.
///
/// # Drop behavior
///
/// The buffer only holds clones, the slice it is committed to is not touched
/// until every slot has been filled. Dropping the buffer early, e.g. while
/// unwinding from a panic in the key function, leaves the slice as it was.
pub struct ScratchBuffer<T> {
    slots: Vec<Option<T>>,
}

impl<T: Clone> ScratchBuffer<T> {
    /// Allocates an empty slot for each of the `len` elements.
    pub fn new(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        ScratchBuffer { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Clones the elements of `src` into the slots chosen by `indexer`. The
    /// source is iterated from the end, so the indexer can hand out positions
    /// in descending order within a bucket and keep the pass stable.
    ///
    /// Elements for which the indexer returns `None` or an out-of-range index
    /// are not written, which `commit` will then detect as an empty slot.
    pub fn scatter_rev<F>(&mut self, src: &[T], mut indexer: F)
    where
        F: FnMut(&T) -> Option<usize>,
    {
        let len = self.len();
        for t in src.iter().rev() {
            match indexer(t) {
                Some(index) if index < len => self.slots[index] = Some(t.clone()),
                _ => {}
            }
        }
    }

    /// Writes the scratch contents back over `dst`.
    ///
    /// Returns `Err` without touching `dst` if any slot was left empty.
    pub fn commit(self, dst: &mut [T]) -> Result<(), ()> {
        debug_assert_eq!(dst.len(), self.len());

        if self.slots.iter().any(Option::is_none) {
            return Err(());
        }

        for (d, s) in dst.iter_mut().zip(self.slots) {
            if let Some(s) = s {
                *d = s;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_reverses_when_asked() {
        let src = [1, 2, 3];
        let mut dst = src;
        let mut buffer = ScratchBuffer::new(src.len());
        let mut next = 0;
        buffer.scatter_rev(&src, |_| {
            next += 1;
            Some(next - 1)
        });
        assert_eq!(buffer.commit(&mut dst), Ok(()));
        assert_eq!(dst, [3, 2, 1]);
    }

    #[test]
    fn missing_slot_leaves_destination_untouched() {
        let src = [1, 2, 3];
        let mut dst = [7, 8, 9];
        let mut buffer = ScratchBuffer::new(src.len());
        // Everything lands in slot 0.
        buffer.scatter_rev(&src, |_| Some(0));
        assert_eq!(buffer.commit(&mut dst), Err(()));
        assert_eq!(dst, [7, 8, 9]);
    }

    #[test]
    fn out_of_range_index_is_dropped() {
        let src = [1, 2];
        let mut dst = src;
        let mut buffer = ScratchBuffer::new(src.len());
        buffer.scatter_rev(&src, |&t| if t == 1 { Some(5) } else { None });
        assert_eq!(buffer.commit(&mut dst), Err(()));
        assert_eq!(dst, [1, 2]);
    }
}
