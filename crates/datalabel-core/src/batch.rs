//! Order-preserving batching of row texts

/// Default number of rows sent to the model per request
pub const DEFAULT_BATCH_SIZE: usize = 15;

/// A contiguous window of row texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// 1-based position of this batch in the run
    pub number: usize,
    /// Global row index of the first member
    pub offset: usize,
    /// Row texts in this window
    pub texts: &'a [String],
}

impl<'a> Batch<'a> {
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Global row index for a 0-based batch-local index, if it is in range
    pub fn global_index(&self, local: usize) -> Option<usize> {
        (local < self.texts.len()).then(|| self.offset + local)
    }
}

/// Split row texts into sequential batches of at most `batch_size` rows
///
/// A `batch_size` of 0 is treated as 1.
pub fn batches(texts: &[String], batch_size: usize) -> impl Iterator<Item = Batch<'_>> {
    let size = batch_size.max(1);
    texts
        .chunks(size)
        .enumerate()
        .map(move |(i, chunk)| Batch {
            number: i + 1,
            offset: i * size,
            texts: chunk,
        })
}
