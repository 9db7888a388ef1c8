use std::ops::Range;

/// A contiguous run of indexes processed together, e.g. a slice of a layer's units.
#[derive(Hash, Debug, Clone, PartialEq, Eq, Copy)]
pub struct Partition {
    start: usize,
    end: usize
}

impl Partition {
    /// `end` is exclusive.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> usize { self.start }
    pub fn end(&self) -> usize { self.end }

    pub fn size(&self) -> usize { self.end - self.start }

    /// Range to index the partitioned data with.
    pub fn range(&self) -> Range<usize> { self.start..self.end }
}
