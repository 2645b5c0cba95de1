//! Native stack growth for recursive dispatch.
//!
//! Symbol dispatch in the evaluator is recursive: an executable register runs
//! a block, the block names another register, and so on. `let` and `do`
//! bodies nest the same way. Programs that chain a few thousand of these
//! would overflow an 8MB thread stack long before any configured depth limit
//! is reached, so every dispatch goes through [`ensure_sufficient_stack`].
//!
//! On wasm the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the native stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining native stack in bytes, when the platform reports it.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// Remaining native stack in bytes, when the platform reports it.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests;
