// Prefix ranges over an index of id triples.
//
// Each index stores the ids of a triple in a different order (spo, pos, osp),
// so that any combination of bound positions is a prefix of one of them.
use std::collections::btree_set::Range;
use std::collections::BTreeSet;

use crate::TripleIds;

pub(crate) trait RangeN {
    /// All entries whose first component is `k1`
    fn range1(&self, k1: usize) -> Range<'_, TripleIds>;
    /// All entries whose first two components are `k1` and `k2`
    fn range2(&self, k1: usize, k2: usize) -> Range<'_, TripleIds>;
}

impl RangeN for BTreeSet<TripleIds> {
    fn range1(&self, k1: usize) -> Range<'_, TripleIds> {
        self.range([k1, 0, 0]..=[k1, usize::MAX, usize::MAX])
    }

    fn range2(&self, k1: usize, k2: usize) -> Range<'_, TripleIds> {
        self.range([k1, k2, 0]..=[k1, k2, usize::MAX])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_ranges() {
        let set: BTreeSet<TripleIds> = [[0, 1, 2], [1, 0, 0], [1, 0, 3], [1, 2, 0], [2, 0, 0]]
            .into_iter()
            .collect();
        assert_eq!(set.range1(1).count(), 3);
        assert_eq!(set.range1(3).count(), 0);
        assert_eq!(
            set.range2(1, 0).copied().collect::<Vec<_>>(),
            vec![[1, 0, 0], [1, 0, 3]]
        );
    }
}
