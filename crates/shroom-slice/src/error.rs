use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("step list must not be empty")]
    EmptySteps,
    #[error("last step must be a positive (got {0})")]
    InvalidTerminalStep(i128),
    #[error("step should not be a negative (step {step} at index {index})")]
    NegativeStep { index: usize, step: i128 },
}

