//! Unmanaged buffers handed to the native toolkit.
//!
//! Memory here comes from the C allocator (`malloc`/`realloc`/`free`) so that the
//! native side sees a single contiguous block per logical array, sized exactly to
//! its contents.

mod sequence;
mod text;

pub use sequence::NativeSequence;
pub use text::NativeText;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("native allocator could not provide {requested} bytes")]
    Exhausted { requested: usize },

    #[error("field '{field}' contains an interior NUL byte")]
    InteriorNul { field: &'static str },
}
