//! Operand stack, register table and dispatch.
//!
//! An [`Environment`] owns its operand stack and its registers. A child
//! borrows its parent read-only: lookups walk child to root, writes stay
//! local. All environments of one tree share a [`Runtime`].

use std::fmt;
use std::rc::Rc;

use ifx_ir::{Block, Symbol, Value};
use ifx_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::{debug_span, trace};

use crate::errors::{external_error, stack_underflow, undefined_symbol, EvalResult};
use crate::runtime::Runtime;
use crate::{stderr_handler, EvalConfig, Primitive, SharedPrintHandler};

/// What a register name resolves to.
#[derive(Clone)]
pub enum StackCell {
    /// A block run in the environment that dispatched the name.
    Executable(Block),
    /// A primitive called with the dispatching environment.
    External(Rc<dyn Primitive>),
    /// Data. Dispatching the name pushes the stored block as one value.
    Value(Block),
}

impl StackCell {
    pub fn external<P: Primitive + 'static>(primitive: P) -> Self {
        StackCell::External(Rc::new(primitive))
    }
}

impl fmt::Debug for StackCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackCell::Executable(block) => write!(f, "Executable({block})"),
            StackCell::External(primitive) => write!(f, "External({})", primitive.name()),
            StackCell::Value(block) => write!(f, "Value({block})"),
        }
    }
}

/// A stack machine scope.
pub struct Environment<'p> {
    stack: Vec<Value>,
    registers: FxHashMap<Symbol, StackCell>,
    parent: Option<&'p Environment<'p>>,
    runtime: Rc<Runtime>,
}

impl Environment<'static> {
    /// A root seeded with the builtin operations, default configuration and
    /// `dbg` output on stderr. Use [`EnvironmentBuilder`](crate::EnvironmentBuilder)
    /// for anything else.
    pub fn new() -> Self {
        let mut env = Self::empty();
        crate::builtins::register(&mut env);
        env
    }

    /// A root with no registers at all.
    pub fn empty() -> Self {
        Self::root(EvalConfig::default(), stderr_handler())
    }

    pub(crate) fn root(config: EvalConfig, print: SharedPrintHandler) -> Self {
        Environment {
            stack: Vec::new(),
            registers: FxHashMap::default(),
            parent: None,
            runtime: Runtime::new(config, print),
        }
    }
}

impl Default for Environment<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Environment<'p> {
    /// A new scope that reads through to `self`.
    pub fn child(&self) -> Environment<'_> {
        Environment {
            stack: Vec::new(),
            registers: FxHashMap::default(),
            parent: Some(self),
            runtime: Rc::clone(&self.runtime),
        }
    }

    pub fn parent(&self) -> Option<&Environment<'p>> {
        self.parent
    }

    pub fn config(&self) -> &EvalConfig {
        &self.runtime.config
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.runtime.print
    }

    // Execution

    /// Run a program stack, top first.
    ///
    /// `program` is what the parser returns: its last element is the first
    /// value written, so it runs first. Walking it from the end undoes the
    /// parser's per-level reversal, which is what makes source run in
    /// written order and `{1 2 3} add` leave 6. Blocks read as data
    /// ([`Block::operands`]) use the same top-first order.
    pub fn execute(&mut self, program: &[Value]) -> EvalResult {
        for value in program.iter().rev() {
            self.execution_step(value)?;
        }
        Ok(())
    }

    /// Run a block as a program.
    pub fn execute_block(&mut self, block: &Block) -> EvalResult {
        self.execute(block.as_stack())
    }

    /// Run one value: numbers push as a one-element block, blocks push
    /// as they are, symbols dispatch.
    pub fn execution_step(&mut self, value: &Value) -> EvalResult {
        trace!(%value, depth = self.stack.len(), "step");
        match value {
            Value::Number(_) => {
                self.push(Value::Block(Block::single(value.clone())));
                Ok(())
            }
            Value::Block(_) => {
                self.push(value.clone());
                Ok(())
            }
            Value::Symbol(symbol) => self.do_symbol(symbol),
        }
    }

    /// Resolve `name` and run what it names in this environment.
    pub fn do_symbol(&mut self, name: &str) -> EvalResult {
        let cell = self.get_symbol(name)?;
        let _depth = self.runtime.enter()?;
        let _span = debug_span!("do_symbol", symbol = name).entered();
        ensure_sufficient_stack(|| match cell {
            StackCell::Executable(block) => self.execute_block(&block),
            StackCell::External(primitive) => primitive
                .call(self)
                .map_err(|cause| external_error(name, cause)),
            StackCell::Value(block) => {
                self.push(Value::Block(block));
                Ok(())
            }
        })
    }

    /// Push `args` in order, then dispatch `name`.
    pub fn call<I>(&mut self, name: &str, args: I) -> EvalResult
    where
        I: IntoIterator<Item = Value>,
    {
        for arg in args {
            self.push(arg);
        }
        self.do_symbol(name)
    }

    // Registers

    /// Find a cell on the parent chain, nearest first.
    pub fn lookup(&self, name: &str) -> Option<&StackCell> {
        let mut env = Some(self);
        while let Some(current) = env {
            if let Some(cell) = current.registers.get(name) {
                return Some(cell);
            }
            env = current.parent;
        }
        None
    }

    /// Like [`lookup`](Self::lookup), failing with `UndefinedSymbol`.
    pub fn get_symbol(&self, name: &str) -> EvalResult<StackCell> {
        self.lookup(name)
            .cloned()
            .ok_or_else(|| undefined_symbol(name))
    }

    /// Bind `name` in this environment only.
    pub fn set(&mut self, name: impl Into<Symbol>, cell: StackCell) {
        self.registers.insert(name.into(), cell);
    }

    pub fn set_all<I, N>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (N, StackCell)>,
        N: Into<Symbol>,
    {
        for (name, cell) in cells {
            self.set(name, cell);
        }
    }

    /// Whether `name` is bound here, ignoring parents.
    pub fn is_local(&self, name: &str) -> bool {
        self.registers.contains_key(name)
    }

    /// A fresh `__do<N>` name, unique across the whole tree.
    pub fn next_do_symbol(&self) -> Symbol {
        Symbol::from(self.runtime.next_do_symbol())
    }

    // Operand stack

    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.stack.pop()
    }

    /// Pop on behalf of `op`, failing with `StackUnderflow` when empty.
    pub fn pop_for(&mut self, op: &str) -> EvalResult<Value> {
        self.stack.pop().ok_or_else(|| stack_underflow(op))
    }

    pub fn peek(&self) -> Option<&Value> {
        self.stack.last()
    }

    /// The `index`-th value counted from the bottom.
    pub fn peek_at(&self, index: usize) -> Option<&Value> {
        self.stack.get(index)
    }

    /// Operand stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn take_stack(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.stack)
    }

    pub fn into_stack(self) -> Vec<Value> {
        self.stack
    }

    pub(crate) fn print(&self, line: &str) {
        self.runtime.print.println(line);
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("stack", &self.stack)
            .field("registers", &self.registers.len())
            .field("has_parent", &self.parent.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
