//! Folding arithmetic.
//!
//! Each operation pops one block and folds left to right over its elements
//! in written order, pushing the bare result. How two elements combine
//! depends on their kinds:
//!
//! | left   | right  | result                                         |
//! |--------|--------|------------------------------------------------|
//! | number | number | decimal arithmetic                             |
//! | block  | block  | element-wise, by dispatching the operation name |
//! | symbol | symbol | concatenation (`sum`/`add` only)               |
//!
//! Anything else is a type error. Element-wise combination dispatches by
//! name rather than recursing directly, so a user binding that shadows
//! `add` is used for the inner elements as well.

use bigdecimal::Zero;
use ifx_ir::{BigDecimal, Block, Symbol, Value, ValueKind};
use num_bigint::{BigInt, Sign};

use crate::errors::{dimension_mismatch, division_by_zero, type_mismatch, EvalResult};
use crate::{Environment, Primitive};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Sum,
    Product,
    Divide,
    Subtract,
}

pub(super) const OPERATIONS: &[(&str, ArithOp)] = &[
    ("sum", ArithOp::Sum),
    ("add", ArithOp::Sum),
    ("product", ArithOp::Product),
    ("mul", ArithOp::Product),
    ("divide", ArithOp::Divide),
    ("div", ArithOp::Divide),
    ("subtract", ArithOp::Subtract),
    ("sub", ArithOp::Subtract),
];

/// An arithmetic fold registered under `name`.
#[derive(Clone, Debug)]
pub struct Arith {
    name: Symbol,
    op: ArithOp,
}

impl Arith {
    pub fn new(name: impl Into<Symbol>, op: ArithOp) -> Self {
        Arith {
            name: name.into(),
            op,
        }
    }

    pub fn op(&self) -> ArithOp {
        self.op
    }

    fn combine(&self, env: &mut Environment<'_>, left: Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => self.numeric(env, &a, b).map(Value::Number),
            (Value::Block(a), Value::Block(b)) => self.element_wise(env, &a, b),
            (Value::Symbol(a), Value::Symbol(b)) if self.op == ArithOp::Sum => {
                Ok(Value::Symbol(Symbol::from(format!("{a}{b}"))))
            }
            (Value::Symbol(_), Value::Symbol(_)) => {
                Err(type_mismatch(&self.name, "number or block", ValueKind::Symbol))
            }
            (left, right) => Err(type_mismatch(&self.name, left.kind().as_str(), right.kind())),
        }
    }

    fn numeric(
        &self,
        env: &Environment<'_>,
        a: &BigDecimal,
        b: &BigDecimal,
    ) -> EvalResult<BigDecimal> {
        Ok(match self.op {
            ArithOp::Sum => a + b,
            ArithOp::Product => a * b,
            ArithOp::Subtract => a - b,
            ArithOp::Divide => {
                if b.is_zero() {
                    return Err(division_by_zero(&self.name));
                }
                trim(divide(a, b, env.config().effective_division_scale()))
            }
        })
    }

    /// Pairs up elements and combines each pair by dispatching this
    /// operation's name on `[a b]`.
    fn element_wise(&self, env: &mut Environment<'_>, a: &Block, b: &Block) -> EvalResult<Value> {
        if a.len() != b.len() {
            return Err(dimension_mismatch(&self.name, a.len(), b.len()));
        }
        let mut results = Vec::with_capacity(a.len());
        for (x, y) in a.operands().zip(b.operands()) {
            env.call(&self.name, [Value::block([x.clone(), y.clone()])])?;
            results.push(env.pop_for(&self.name)?);
        }
        Ok(Value::block(results))
    }
}

impl Primitive for Arith {
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, env: &mut Environment<'_>) -> EvalResult {
        let block = match env.pop_for(&self.name)? {
            Value::Block(block) => block,
            other => return Err(type_mismatch(&self.name, "block", other.kind())),
        };
        let mut operands = block.operands();
        let Some(first) = operands.next() else {
            return Err(dimension_mismatch(&self.name, 1, 0));
        };
        let mut acc = first.clone();
        for next in operands {
            acc = self.combine(env, acc, next)?;
        }
        env.push(acc);
        Ok(())
    }
}

/// `a / b` with `scale` fractional digits, rounded half-up (ties away from
/// zero). `b` must be non-zero.
///
/// Works on the integer significands, so the quotient is rounded exactly
/// once.
fn divide(a: &BigDecimal, b: &BigDecimal, scale: u32) -> BigDecimal {
    let (mut num, a_exp) = a.as_bigint_and_exponent();
    let (mut den, b_exp) = b.as_bigint_and_exponent();

    // a / b = (num / den) * 10^(b_exp - a_exp)
    let shift = i64::from(scale) + b_exp - a_exp;
    let power = BigInt::from(10).pow(u32::try_from(shift.unsigned_abs()).unwrap_or(u32::MAX));
    if shift >= 0 {
        num *= power;
    } else {
        den *= power;
    }
    if den.sign() == Sign::Minus {
        num = -num;
        den = -den;
    }

    let mut quotient = &num / &den;
    let remainder = &num % &den;
    if remainder.magnitude() + remainder.magnitude() >= *den.magnitude() {
        if num.sign() == Sign::Minus {
            quotient -= BigInt::from(1);
        } else {
            quotient += BigInt::from(1);
        }
    }
    BigDecimal::new(quotient, i64::from(scale))
}

/// Drop trailing fractional zeros without going to exponent notation.
fn trim(n: BigDecimal) -> BigDecimal {
    let n = n.normalized();
    if n.as_bigint_and_exponent().1 < 0 {
        n.with_scale(0)
    } else {
        n
    }
}
