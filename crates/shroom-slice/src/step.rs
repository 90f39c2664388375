use std::fmt::Debug;

use derive_more::Deref;

use crate::{Error, SliceResult};

/// Step type, every primitive integer can be used as a step
pub trait ChunkStep: Copy + Debug {
    /// Widens the step into an `i128`
    fn to_step(self) -> i128;
}

/// Macro to implement the step trait for integer types which fit into an `i128`
macro_rules! impl_chunk_step {
    ($($ty:ty),*) => {
        $(
            impl ChunkStep for $ty {
                fn to_step(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_chunk_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl ChunkStep for u128 {
    fn to_step(self) -> i128 {
        // No slice gets that long, so saturating is fine
        i128::try_from(self).unwrap_or(i128::MAX)
    }
}

/// Converts a non-negative step into a length, saturating at `usize::MAX`
pub(crate) fn step_len(step: i128) -> usize {
    debug_assert!(step >= 0);
    usize::try_from(step).unwrap_or(usize::MAX)
}

/// A non-empty step list with a positive terminal step
///
/// Only the terminal step is validated, negative steps before it are reported
/// once a cursor reaches them.
#[derive(Debug, Clone, Copy, Deref)]
pub struct Steps<'s, N> {
    #[deref]
    steps: &'s [N],
    terminal: i128,
}

impl<'s, N: ChunkStep> Steps<'s, N> {
    pub fn new(steps: &'s [N]) -> SliceResult<Self> {
        let Some(last) = steps.last() else {
            log::debug!("rejecting empty step list");
            return Err(Error::EmptySteps);
        };

        let terminal = last.to_step();
        if terminal <= 0 {
            log::debug!("rejecting step list {steps:?}, terminal step is {terminal}");
            return Err(Error::InvalidTerminalStep(terminal));
        }

        Ok(Self { steps, terminal })
    }

    /// The step which is repeated after the list is exhausted
    pub fn terminal(&self) -> usize {
        step_len(self.terminal)
    }

    pub fn cursor(&self) -> StepCursor<'s, N> {
        StepCursor {
            steps: self.steps,
            terminal: self.terminal,
            ix: 0,
        }
    }

    /// Estimates the chunk count for a slice with `len` elements from the
    /// first non-zero step
    pub fn capacity_hint(&self, len: usize) -> usize {
        // Terminates, the terminal step is positive
        let step = self
            .cursor()
            .find(|&step| step != 0)
            .unwrap_or(self.terminal);

        let step = if step < 0 {
            self.terminal()
        } else {
            step_len(step)
        };
        len / step + 1
    }
}

/// Cursor over a step list, yields the terminal step forever once the list
/// is exhausted
#[derive(Debug, Clone)]
pub struct StepCursor<'s, N> {
    steps: &'s [N],
    terminal: i128,
    ix: usize,
}

impl<N: ChunkStep> StepCursor<'_, N> {
    /// Index of the step the next call to `next_step` yields,
    /// indices past the list refer to the terminal step
    pub fn index(&self) -> usize {
        self.ix
    }

    pub fn next_step(&mut self) -> i128 {
        let step = self
            .steps
            .get(self.ix)
            .map_or(self.terminal, |step| step.to_step());
        self.ix = self.ix.saturating_add(1);
        step
    }
}

impl<N: ChunkStep> Iterator for StepCursor<'_, N> {
    type Item = i128;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
