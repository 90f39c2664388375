//! Splits slices into consecutive chunks, with the chunk lengths taken from a
//! cycling list of steps.
//!
//! ```
//! let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let chunks = shroom_slice::chunk(&data, &[1, 0, 3]);
//! let expected: [&[i32]; 5] = [&[1], &[], &[2, 3, 4], &[5, 6, 7], &[8, 9, 10]];
//! assert_eq!(chunks, expected);
//! ```

pub mod chunk;
pub mod error;
pub mod step;
pub mod test_util;

pub use error::Error;

pub type SliceResult<T> = Result<T, error::Error>;

pub use chunk::{
    chunk, chunk_mut, chunk_owned, try_chunk, try_chunk_mut, StepChunkExt, StepChunks,
    StepChunksMut,
};
pub use step::{ChunkStep, StepCursor, Steps};
