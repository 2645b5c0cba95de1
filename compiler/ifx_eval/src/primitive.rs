//! Externally implemented operations.

use std::fmt;

use crate::{Environment, EvalResult};

/// An operation implemented in Rust and registered under a name.
///
/// A primitive works only through the environment it is handed: it pops its
/// operands and pushes its results there. Errors it returns are wrapped as
/// [`EvalError::External`](crate::EvalError::External) by the dispatcher.
pub trait Primitive {
    /// Name used in logs and `Debug` output.
    fn name(&self) -> &str;

    fn call(&self, env: &mut Environment<'_>) -> EvalResult;
}

/// Signature of a plain-function primitive.
pub type PrimitiveFn = fn(&mut Environment<'_>) -> EvalResult;

/// A [`Primitive`] backed by a function pointer.
#[derive(Clone, Copy)]
pub struct NativeFn {
    name: &'static str,
    f: PrimitiveFn,
}

impl NativeFn {
    pub const fn new(name: &'static str, f: PrimitiveFn) -> Self {
        NativeFn { name, f }
    }
}

impl Primitive for NativeFn {
    fn name(&self) -> &str {
        self.name
    }

    fn call(&self, env: &mut Environment<'_>) -> EvalResult {
        (self.f)(env)
    }
}

impl fmt::Debug for dyn Primitive + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<primitive {}>", self.name())
    }
}
