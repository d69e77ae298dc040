//! Block-level summaries produced while filling the tables.
//!
//! Each `BlockSummary` covers layers [start, end) and remembers the best chain
//! end found inside that block. Summaries of adjacent blocks merge into the
//! summary of their union.

/// A chain end: the layer a chain stops at and the chain's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEnd {
    pub index: usize,
    pub length: usize,
}

/// Summary for a contiguous interval of layers [start, end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    /// Inclusive start layer.
    pub start: usize,
    /// Exclusive end layer.
    pub end: usize,
    /// Lowest layer achieving the maximal length inside the block, `None` for
    /// an empty block.
    pub best: Option<ChainEnd>,
}

impl BlockSummary {
    /// Summarise `lengths[start..end]`.
    pub fn from_lengths(start: usize, end: usize, lengths: &[usize]) -> Self {
        let mut best: Option<ChainEnd> = None;
        for (index, &length) in lengths.iter().enumerate().take(end).skip(start) {
            if best.map_or(true, |b| length > b.length) {
                best = Some(ChainEnd { index, length });
            }
        }
        Self { start, end, best }
    }

    /// Length of the block in layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the block is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combine with the block immediately to the right.
    ///
    /// The right block's end only wins on a strictly greater length, so the
    /// merged summary still names the lowest maximal layer. The operation is
    /// associative over runs of adjacent blocks.
    pub fn merge(&self, right: &Self) -> Self {
        debug_assert_eq!(self.end, right.start, "summaries must be adjacent");
        let best = match (self.best, right.best) {
            (Some(l), Some(r)) => Some(if r.length > l.length { r } else { l }),
            (l, r) => l.or(r),
        };
        Self {
            start: self.start,
            end: right.end,
            best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockSummary, ChainEnd};

    #[test]
    fn zero_length_block_is_empty() {
        let b = BlockSummary::from_lengths(3, 3, &[1, 2, 3, 4]);
        assert_eq!(b.len(), 0);
        assert!(b.is_empty());
        assert_eq!(b.best, None);
    }

    #[test]
    fn first_maximum_in_block() {
        let lengths = [1, 3, 2, 3, 1];
        let b = BlockSummary::from_lengths(0, 5, &lengths);
        assert_eq!(b.best, Some(ChainEnd { index: 1, length: 3 }));
        let b = BlockSummary::from_lengths(2, 5, &lengths);
        assert_eq!(b.best, Some(ChainEnd { index: 3, length: 3 }));
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let lengths = [2, 1, 2, 1];
        let left = BlockSummary::from_lengths(0, 2, &lengths);
        let right = BlockSummary::from_lengths(2, 4, &lengths);
        let merged = left.merge(&right);
        assert_eq!((merged.start, merged.end), (0, 4));
        assert_eq!(merged.best, Some(ChainEnd { index: 0, length: 2 }));
    }

    #[test]
    fn merge_takes_strictly_longer_right() {
        let lengths = [1, 2, 3];
        let left = BlockSummary::from_lengths(0, 1, &lengths);
        let right = BlockSummary::from_lengths(1, 3, &lengths);
        assert_eq!(
            left.merge(&right).best,
            Some(ChainEnd { index: 2, length: 3 })
        );
    }

    #[test]
    fn merge_with_empty_keeps_other_side() {
        let lengths = [4, 1];
        let left = BlockSummary::from_lengths(0, 0, &lengths);
        let right = BlockSummary::from_lengths(0, 2, &lengths);
        assert_eq!(left.merge(&right).best, right.best);
        let tail = BlockSummary::from_lengths(2, 2, &lengths);
        assert_eq!(right.merge(&tail).best, right.best);
    }
}
