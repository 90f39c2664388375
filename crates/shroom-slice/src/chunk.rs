use std::{iter::FusedIterator, mem};

use crate::{
    step::{step_len, ChunkStep, StepCursor, Steps},
    Error, SliceResult,
};

/// Pulls the next step and clamps it to the `rest` remaining elements,
/// returns `None` once the slice is exhausted
fn next_chunk_len<N: ChunkStep>(
    cursor: &mut StepCursor<'_, N>,
    rest: usize,
) -> Option<SliceResult<usize>> {
    let index = cursor.index();
    let step = cursor.next_step();
    if step < 0 {
        log::debug!("negative step {step} at index {index}");
        return Some(Err(Error::NegativeStep { index, step }));
    }

    let n = step_len(step).min(rest);
    // A zero length chunk at the end of the slice is never emitted
    if n == 0 && rest == 0 {
        return None;
    }

    Some(Ok(n))
}

/// Iterator over the chunks of a slice, see [`chunk`]
///
/// Yields an error when a negative step is reached and nothing afterwards.
#[derive(Debug, Clone)]
pub struct StepChunks<'a, 's, T, N> {
    rest: &'a [T],
    offset: usize,
    cursor: StepCursor<'s, N>,
    done: bool,
}

impl<'a, 's, T, N: ChunkStep> StepChunks<'a, 's, T, N> {
    pub fn new(slice: &'a [T], steps: Steps<'s, N>) -> Self {
        Self {
            rest: slice,
            offset: 0,
            cursor: steps.cursor(),
            // An empty slice has no chunks, regardless of the steps
            done: slice.is_empty(),
        }
    }

    /// Offset of the next chunk in the source slice
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a, T, N: ChunkStep> Iterator for StepChunks<'a, '_, T, N> {
    type Item = SliceResult<&'a [T]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match next_chunk_len(&mut self.cursor, self.rest.len()) {
            Some(Ok(n)) => {
                log::trace!("chunk at {} with len {n}", self.offset);
                let (head, tail) = self.rest.split_at(n);
                self.rest = tail;
                self.offset += n;
                Some(Ok(head))
            }
            Some(Err(err)) => {
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<T, N: ChunkStep> FusedIterator for StepChunks<'_, '_, T, N> {}

/// Mutable version of [`StepChunks`]
#[derive(Debug)]
pub struct StepChunksMut<'a, 's, T, N> {
    rest: &'a mut [T],
    offset: usize,
    cursor: StepCursor<'s, N>,
    done: bool,
}

impl<'a, 's, T, N: ChunkStep> StepChunksMut<'a, 's, T, N> {
    pub fn new(slice: &'a mut [T], steps: Steps<'s, N>) -> Self {
        let done = slice.is_empty();
        Self {
            rest: slice,
            offset: 0,
            cursor: steps.cursor(),
            done,
        }
    }

    /// Offset of the next chunk in the source slice
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a, T, N: ChunkStep> Iterator for StepChunksMut<'a, '_, T, N> {
    type Item = SliceResult<&'a mut [T]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match next_chunk_len(&mut self.cursor, self.rest.len()) {
            Some(Ok(n)) => {
                log::trace!("chunk at {} with len {n}", self.offset);
                let (head, tail) = mem::take(&mut self.rest).split_at_mut(n);
                self.rest = tail;
                self.offset += n;
                Some(Ok(head))
            }
            Some(Err(err)) => {
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<T, N: ChunkStep> FusedIterator for StepChunksMut<'_, '_, T, N> {}

/// Splits `slice` into chunks, the chunk lengths are taken from `steps` in
/// order. Once the steps are exhausted the last step is reused.
///
/// A zero step yields an empty chunk, the last step must be positive and no
/// step may be negative. The chunks borrow from `slice`.
pub fn try_chunk<'a, T, N: ChunkStep>(slice: &'a [T], steps: &[N]) -> SliceResult<Vec<&'a [T]>> {
    let steps = Steps::new(steps)?;
    if slice.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::with_capacity(steps.capacity_hint(slice.len()));
    for chunk in StepChunks::new(slice, steps) {
        chunks.push(chunk?);
    }
    Ok(chunks)
}

/// Like [`try_chunk`] but yields mutable chunks
pub fn try_chunk_mut<'a, T, N: ChunkStep>(
    slice: &'a mut [T],
    steps: &[N],
) -> SliceResult<Vec<&'a mut [T]>> {
    let steps = Steps::new(steps)?;
    if slice.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::with_capacity(steps.capacity_hint(slice.len()));
    for chunk in StepChunksMut::new(slice, steps) {
        chunks.push(chunk?);
    }
    Ok(chunks)
}

/// Splits `slice` into chunks, see [`try_chunk`]
///
/// ```
/// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// let chunks = shroom_slice::chunk(&data, &[1, 2, 3]);
/// let expected: [&[i32]; 5] = [&[1], &[2, 3], &[4, 5, 6], &[7, 8, 9], &[10]];
/// assert_eq!(chunks, expected);
/// ```
///
/// # Panics
///
/// Panics If `steps` is empty, the last step is not positive or a negative
/// step is reached while chunking.
#[track_caller]
pub fn chunk<'a, T, N: ChunkStep>(slice: &'a [T], steps: &[N]) -> Vec<&'a [T]> {
    match try_chunk(slice, steps) {
        Ok(chunks) => chunks,
        Err(err) => panic!("{err}"),
    }
}

/// Mutable version of [`chunk`]
///
/// # Panics
///
/// Same conditions as [`chunk`]
#[track_caller]
pub fn chunk_mut<'a, T, N: ChunkStep>(slice: &'a mut [T], steps: &[N]) -> Vec<&'a mut [T]> {
    match try_chunk_mut(slice, steps) {
        Ok(chunks) => chunks,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`chunk`] but copies every chunk, the result does not borrow `slice`
///
/// # Panics
///
/// Same conditions as [`chunk`]
#[track_caller]
pub fn chunk_owned<T: Clone, N: ChunkStep>(slice: &[T], steps: &[N]) -> Vec<Vec<T>> {
    chunk(slice, steps).into_iter().map(<[T]>::to_vec).collect()
}

/// Extension trait to create step chunk iterators from slices
pub trait StepChunkExt<T> {
    fn step_chunks<'s, N: ChunkStep>(
        &self,
        steps: &'s [N],
    ) -> SliceResult<StepChunks<'_, 's, T, N>>;

    fn step_chunks_mut<'s, N: ChunkStep>(
        &mut self,
        steps: &'s [N],
    ) -> SliceResult<StepChunksMut<'_, 's, T, N>>;
}

impl<T> StepChunkExt<T> for [T] {
    fn step_chunks<'s, N: ChunkStep>(
        &self,
        steps: &'s [N],
    ) -> SliceResult<StepChunks<'_, 's, T, N>> {
        Ok(StepChunks::new(self, Steps::new(steps)?))
    }

    fn step_chunks_mut<'s, N: ChunkStep>(
        &mut self,
        steps: &'s [N],
    ) -> SliceResult<StepChunksMut<'_, 's, T, N>> {
        Ok(StepChunksMut::new(self, Steps::new(steps)?))
    }
}
