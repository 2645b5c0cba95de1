//! Operations seeded into every root environment.
//!
//! - `dbg`: print the top of the stack
//! - `let`: bind `{name value}` pairs in a child scope and run a body there
//! - `do`: register a block under a fresh name and push the name
//!   (see [`DoBlock`])
//! - `sum`/`add`, `product`/`mul`, `divide`/`div`, `subtract`/`sub`: fold an
//!   operator over a block, see [`arith`]

mod arith;

use ifx_ir::{Block, Symbol, Value};
use tracing::{debug, debug_span};

use crate::errors::{malformed_let, type_mismatch, EvalResult};
use crate::{Environment, NativeFn, Primitive, StackCell};

pub use arith::{Arith, ArithOp};

/// Shown by `dbg` when there is nothing to show.
pub const EMPTY_STACK: &str = "<empty>";

/// Bind every builtin in `env`.
pub fn register(env: &mut Environment<'_>) {
    env.set_all([
        ("dbg", StackCell::external(NativeFn::new("dbg", dbg))),
        ("let", StackCell::external(NativeFn::new("let", let_scope))),
        ("do", StackCell::external(NativeFn::new("do", do_block))),
    ]);
    for &(name, op) in arith::OPERATIONS {
        env.set(name, StackCell::external(Arith::new(name, op)));
    }
}

fn dbg(env: &mut Environment<'_>) -> EvalResult {
    let line = env
        .peek()
        .map_or_else(|| EMPTY_STACK.to_string(), ToString::to_string);
    env.print(&line);
    Ok(())
}

fn do_block(env: &mut Environment<'_>) -> EvalResult {
    let _span = debug_span!("do").entered();
    let block = match env.pop_for("do")? {
        Value::Block(block) => block,
        other => return Err(type_mismatch("do", "block", other.kind())),
    };
    let symbol = env.next_do_symbol();
    debug!(%symbol, %block, "registered block");
    env.set(
        symbol.clone(),
        StackCell::external(DoBlock {
            symbol: symbol.clone(),
            block,
        }),
    );
    env.push(Value::Symbol(symbol));
    Ok(())
}

/// A block registered by `do`.
///
/// Runs in whichever environment dispatches its name, so `let` bindings
/// around the call are visible to the body. Being a primitive, failures in
/// the body come back wrapped under the generated name.
#[derive(Clone, Debug)]
pub struct DoBlock {
    symbol: Symbol,
    block: Block,
}

impl DoBlock {
    pub fn block(&self) -> &Block {
        &self.block
    }
}

impl Primitive for DoBlock {
    fn name(&self) -> &str {
        &self.symbol
    }

    fn call(&self, env: &mut Environment<'_>) -> EvalResult {
        env.execute_block(&self.block)
    }
}

/// Pops `{name value}` pairs until a bare symbol, the body.
///
/// The body runs in a child scope holding the bindings, and whatever it
/// leaves on the child's stack is moved onto this one in the same order.
fn let_scope(env: &mut Environment<'_>) -> EvalResult {
    let _span = debug_span!("let").entered();
    let mut bindings = Vec::new();
    let body = loop {
        match env.pop_for("let")? {
            Value::Symbol(body) => break body,
            Value::Block(pair) => bindings.push(binding(&pair)?),
            Value::Number(n) => {
                return Err(malformed_let(format!(
                    "expected a {{name value}} pair, found number {n}"
                )))
            }
        }
    };
    debug!(%body, bindings = bindings.len(), "entering scope");

    let results = {
        let mut child = env.child();
        for (name, value) in bindings {
            child.set(name, StackCell::Value(Block::single(value)));
        }
        child.do_symbol(&body)?;
        child.into_stack()
    };
    for value in results {
        env.push(value);
    }
    Ok(())
}

fn binding(pair: &Block) -> EvalResult<(Symbol, Value)> {
    if pair.len() != 2 {
        return Err(malformed_let(format!(
            "expected a {{name value}} pair, found {pair}"
        )));
    }
    match (pair.operand(0), pair.operand(1)) {
        (Some(Value::Symbol(name)), Some(value)) => Ok((name.clone(), value.clone())),
        _ => Err(malformed_let(format!(
            "binding name must be a symbol, found {pair}"
        ))),
    }
}
