//! Evaluation errors and their constructors.
//!
//! Builtins never build `EvalError` variants by hand; they call the `#[cold]`
//! constructors below so that messages stay uniform.
//!
//! Nothing in the evaluator catches an error. Every failure unwinds through
//! `execute`/`do_symbol` to the host. Failures raised inside an external
//! primitive arrive wrapped in [`EvalError::External`], one wrapper per
//! dispatch they crossed; [`EvalError::root_cause`] strips the wrappers.

use ifx_ir::ValueKind;
use thiserror::Error;

/// Result of an evaluation step. Most steps return nothing; their effect is
/// on the operand stack.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No environment on the parent chain defines the symbol.
    #[error("undefined symbol: {symbol}")]
    UndefinedSymbol { symbol: String },

    /// An external primitive failed.
    #[error("error in call to external function `{symbol}`: {cause}")]
    External {
        symbol: String,
        #[source]
        cause: Box<EvalError>,
    },

    /// An operand of the wrong kind.
    #[error("type error in `{op}`: expected {expected}, found {found}")]
    Type {
        op: String,
        expected: String,
        found: String,
    },

    /// Element-wise operands of different lengths.
    #[error("dimension error in `{op}`: expected {expected} elements, found {found}")]
    Dimension {
        op: String,
        expected: usize,
        found: usize,
    },

    /// A `let` binding that is not a `{name value}` pair.
    #[error("let: {reason}")]
    MalformedLet { reason: String },

    /// A primitive popped an empty operand stack.
    #[error("`{op}` needs an operand but the stack is empty")]
    StackUnderflow { op: String },

    #[error("`{op}`: division by zero")]
    DivisionByZero { op: String },

    /// Nested dispatch went deeper than the configured limit.
    #[error("maximum dispatch depth of {limit} exceeded")]
    RecursionLimit { limit: usize },
}

/// Field-less mirror of [`EvalError`] for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    UndefinedSymbol,
    External,
    Type,
    Dimension,
    MalformedLet,
    StackUnderflow,
    DivisionByZero,
    RecursionLimit,
}

impl EvalError {
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::UndefinedSymbol { .. } => EvalErrorKind::UndefinedSymbol,
            EvalError::External { .. } => EvalErrorKind::External,
            EvalError::Type { .. } => EvalErrorKind::Type,
            EvalError::Dimension { .. } => EvalErrorKind::Dimension,
            EvalError::MalformedLet { .. } => EvalErrorKind::MalformedLet,
            EvalError::StackUnderflow { .. } => EvalErrorKind::StackUnderflow,
            EvalError::DivisionByZero { .. } => EvalErrorKind::DivisionByZero,
            EvalError::RecursionLimit { .. } => EvalErrorKind::RecursionLimit,
        }
    }

    /// The innermost error under any `External` wrappers.
    pub fn root_cause(&self) -> &EvalError {
        let mut current = self;
        while let EvalError::External { cause, .. } = current {
            current = cause;
        }
        current
    }

    /// Symbols of the external calls this error crossed, outermost first.
    pub fn external_trace(&self) -> Vec<&str> {
        let mut trace = Vec::new();
        let mut current = self;
        while let EvalError::External { symbol, cause } = current {
            trace.push(symbol.as_str());
            current = cause;
        }
        trace
    }
}

// Lookup

#[cold]
pub fn undefined_symbol(symbol: &str) -> EvalError {
    EvalError::UndefinedSymbol {
        symbol: symbol.to_string(),
    }
}

#[cold]
pub fn external_error(symbol: &str, cause: EvalError) -> EvalError {
    EvalError::External {
        symbol: symbol.to_string(),
        cause: Box::new(cause),
    }
}

// Operands

#[cold]
pub fn type_mismatch(op: &str, expected: impl Into<String>, found: ValueKind) -> EvalError {
    EvalError::Type {
        op: op.to_string(),
        expected: expected.into(),
        found: found.to_string(),
    }
}

#[cold]
pub fn dimension_mismatch(op: &str, expected: usize, found: usize) -> EvalError {
    EvalError::Dimension {
        op: op.to_string(),
        expected,
        found,
    }
}

#[cold]
pub fn stack_underflow(op: &str) -> EvalError {
    EvalError::StackUnderflow { op: op.to_string() }
}

#[cold]
pub fn division_by_zero(op: &str) -> EvalError {
    EvalError::DivisionByZero { op: op.to_string() }
}

// Binding

#[cold]
pub fn malformed_let(reason: impl Into<String>) -> EvalError {
    EvalError::MalformedLet {
        reason: reason.into(),
    }
}

// Resources

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::RecursionLimit { limit }
}
