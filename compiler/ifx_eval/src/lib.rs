//! ifexpr evaluator.
//!
//! A stack machine over [`Value`](ifx_ir::Value)s. An [`Environment`] runs a
//! program stack produced by `ifx_parse`: numbers are pushed as one-element
//! blocks, blocks are pushed as they are, and symbols are dispatched through
//! the register tables of the environment and its parents.
//!
//! ```text
//! let program = ifx_parse::parse_source("{1 2 3} add")?;
//! let mut env = Environment::new();
//! env.execute(&program)?;
//! // env.stack() == [Number(6)]
//! ```
//!
//! Every root carries the builtins `dbg`, `let`, `do` and the arithmetic
//! folds. Hosts add their own operations by implementing [`Primitive`] and
//! binding it with [`Environment::set`].

mod builder;
pub mod builtins;
mod config;
mod environment;
mod errors;
mod primitive;
mod print_handler;
mod runtime;

pub use builder::EnvironmentBuilder;
pub use config::{EvalConfig, DEFAULT_DIVISION_SCALE, MAX_DIVISION_SCALE};
pub use environment::{Environment, StackCell};
pub use errors::{
    dimension_mismatch, division_by_zero, external_error, malformed_let, recursion_limit,
    stack_underflow, type_mismatch, undefined_symbol, EvalError, EvalErrorKind, EvalResult,
};
pub use primitive::{NativeFn, Primitive, PrimitiveFn};
pub use print_handler::{
    buffer_handler, silent_handler, stderr_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StderrPrintHandler,
};
