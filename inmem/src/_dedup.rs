// Collapse runs of equal ids in a sorted stream of ids.

pub(crate) trait SortedIdsDedup: Iterator<Item = usize> + Sized {
    fn dedup_sorted(self) -> DedupSorted<Self> {
        DedupSorted {
            inner: self,
            last: None,
        }
    }
}
impl<I: Iterator<Item = usize>> SortedIdsDedup for I {}

pub(crate) struct DedupSorted<I> {
    inner: I,
    last: Option<usize>,
}

impl<I: Iterator<Item = usize>> Iterator for DedupSorted<I> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cand = self.inner.next()?;
            if self.last != Some(cand) {
                self.last = Some(cand);
                return Some(cand);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dedup_sorted() {
        let got: Vec<_> = [0, 0, 1, 2, 2, 2, 5].into_iter().dedup_sorted().collect();
        assert_eq!(got, vec![0, 1, 2, 5]);
        let got: Vec<_> = std::iter::empty().dedup_sorted().collect();
        assert!(got.is_empty());
    }
}
