//! ifexpr IR - the value tree.
//!
//! The parser produces, and the evaluator consumes, a tree of [`Value`]s:
//! - `Number`: an arbitrary-precision decimal (`BigDecimal`)
//! - `Symbol`: a bare word, dispatched by name at run time
//! - `Block`: a quoted, immutable sequence of values
//!
//! # Stack Order
//!
//! A [`Block`] stores its elements the way the parser leaves them: reversed,
//! so that the last element is the top of the block and the first value
//! written in the source sits on top. Everything that reads a block as a
//! program or as a list of operands reads it top-down, which is the order the
//! values were written in. Use [`Block::operands`] for that view and
//! [`Block::as_stack`] for the raw storage.

mod block;
mod value;

pub use bigdecimal::BigDecimal;
pub use block::{Block, Operands};
pub use value::{Symbol, Value, ValueKind};
