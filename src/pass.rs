//! Parameter-passing optimization at the wrapper boundary.
//!
//! Native parameters are forwarded to the C call unchanged either way; the
//! mode only decides whether the wrapper boundary should take a copy
//! (cheap, word-sized trivially-copyable values) or accept a reference and
//! copy once at the call itself (everything larger).

use std::mem;

/// Machine word size; the unit of the optimization threshold.
pub const WORD_BYTES: usize = mem::size_of::<usize>();

/// Default threshold: one machine word.
pub const WORD_THRESHOLD: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassingMode {
    ByValue,
    ByReference,
}

/// Passing mode for `T` under the default one-word threshold.
pub const fn optimize<T>() -> PassingMode {
    optimize_with::<T>(WORD_THRESHOLD)
}

/// Passing mode for `T` under an explicit threshold, in machine words.
///
/// By value iff the type is trivially copyable (nothing to drop; the use
/// sites additionally require `Copy`) and no larger than the threshold.
pub const fn optimize_with<T>(word_threshold: usize) -> PassingMode {
    let trivially_copyable = !mem::needs_drop::<T>();
    let small_enough = mem::size_of::<T>() <= word_threshold * WORD_BYTES;

    if trivially_copyable && small_enough {
        PassingMode::ByValue
    } else {
        PassingMode::ByReference
    }
}

/// Accepted argument forms at the wrapper boundary.
///
/// A parameter of native type `T` may arrive as `T` itself or as `&T`;
/// both forward the identical value to the native call. Passing `&T` is
/// the by-reference mode: no copy is made until the call itself needs the
/// value.
///
/// The wrapper accepts both forms for every parameter; [`optimize`] states
/// the recommended mode for a given type but is not enforced per parameter
/// at the `call` boundary. Callers pass large arguments as `&T` to get the
/// by-reference mode.
pub trait ForwardArg<T> {
    fn forward(self) -> T;
}

impl<T> ForwardArg<T> for T {
    fn forward(self) -> T {
        self
    }
}

impl<T: Copy> ForwardArg<T> for &T {
    fn forward(self) -> T {
        *self
    }
}
