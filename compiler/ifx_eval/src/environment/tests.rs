use super::*;
use crate::{buffer_handler, EnvironmentBuilder, EvalError, NativeFn};
use pretty_assertions::assert_eq;

fn num(n: i64) -> Value {
    Value::from(n)
}

fn wrapped(n: i64) -> Value {
    Value::Block(Block::single(num(n)))
}

#[test]
fn numbers_push_as_single_blocks() {
    let mut env = Environment::empty();
    env.execution_step(&num(7)).unwrap();
    assert_eq!(env.stack(), &[wrapped(7)]);
}

#[test]
fn blocks_push_verbatim() {
    let mut env = Environment::empty();
    let block = Value::block([num(1), Value::symbol("add")]);
    env.execution_step(&block).unwrap();
    assert_eq!(env.stack(), &[block]);
}

#[test]
fn execute_runs_program_stack_top_first() {
    let mut env = Environment::empty();
    // program stack for "1 2 3"
    env.execute(&[num(3), num(2), num(1)]).unwrap();
    assert_eq!(env.stack(), &[wrapped(1), wrapped(2), wrapped(3)]);
    assert_eq!(env.peek(), Some(&wrapped(3)));
    assert_eq!(env.peek_at(0), Some(&wrapped(1)));
    assert_eq!(env.peek_at(3), None);
}

#[test]
fn undefined_symbol_is_reported_by_name() {
    let mut env = Environment::empty();
    let err = env.execute(&[Value::symbol("nosuchsymbol")]).unwrap_err();
    assert_eq!(err, crate::undefined_symbol("nosuchsymbol"));
}

#[test]
fn value_cell_pushes_its_block() {
    let mut env = Environment::empty();
    let stored = Block::from_operands([num(1), num(2)]);
    env.set("pair", StackCell::Value(stored.clone()));
    env.do_symbol("pair").unwrap();
    assert_eq!(env.stack(), &[Value::Block(stored)]);
}

#[test]
fn executable_cell_runs_in_dispatching_environment() {
    let mut root = Environment::empty();
    root.set(
        "show",
        StackCell::Executable(Block::single(Value::symbol("x"))),
    );
    let mut child = root.child();
    child.set("x", StackCell::Value(Block::single(num(9))));
    child.do_symbol("show").unwrap();
    assert_eq!(child.stack(), &[wrapped(9)]);
    assert!(root.stack().is_empty());
}

#[test]
fn lookup_walks_to_root_and_set_stays_local() {
    let mut root = Environment::empty();
    root.set("a", StackCell::Value(Block::single(num(1))));
    let mut child = root.child();
    child.set("b", StackCell::Value(Block::single(num(2))));
    {
        let grandchild = child.child();
        assert!(grandchild.lookup("a").is_some());
        assert!(grandchild.lookup("b").is_some());
        assert!(!grandchild.is_local("a"));
    }
    assert!(child.is_local("b"));
    assert!(root.lookup("b").is_none());
}

#[test]
fn child_binding_shadows_parent() {
    let mut root = Environment::empty();
    root.set("x", StackCell::Value(Block::single(num(1))));
    let mut child = root.child();
    child.set("x", StackCell::Value(Block::single(num(2))));
    child.do_symbol("x").unwrap();
    assert_eq!(child.into_stack(), vec![wrapped(2)]);
    root.do_symbol("x").unwrap();
    assert_eq!(root.stack(), &[wrapped(1)]);
}

fn fail(env: &mut Environment<'_>) -> EvalResult {
    env.pop_for("fail").map(|_| ())
}

#[test]
fn primitive_failures_are_wrapped() {
    let mut env = Environment::empty();
    env.set("fail", StackCell::external(NativeFn::new("fail", fail)));
    let err = env.do_symbol("fail").unwrap_err();
    assert_eq!(
        err,
        crate::external_error("fail", crate::stack_underflow("fail"))
    );
    assert_eq!(err.root_cause(), &crate::stack_underflow("fail"));
}

fn double(env: &mut Environment<'_>) -> EvalResult {
    let value = env.pop_for("double")?;
    let Some(n) = value.as_number() else {
        return Err(crate::type_mismatch("double", "number", value.kind()));
    };
    env.push(Value::Number(n * ifx_ir::BigDecimal::from(2)));
    Ok(())
}

#[test]
fn call_pushes_arguments_then_dispatches() {
    let mut env = Environment::empty();
    env.set_all([("double", StackCell::external(NativeFn::new("double", double)))]);
    env.call("double", [num(21)]).unwrap();
    assert_eq!(env.take_stack(), vec![num(42)]);
    assert!(env.stack().is_empty());
}

#[test]
fn do_symbols_are_shared_across_the_tree() {
    let root = Environment::empty();
    let child = root.child();
    assert_eq!(root.next_do_symbol(), "__do0");
    assert_eq!(child.next_do_symbol(), "__do1");
    assert_eq!(root.next_do_symbol(), "__do2");
}

#[test]
fn recursion_limit_stops_runaway_dispatch() {
    let mut env = EnvironmentBuilder::new()
        .without_builtins()
        .max_depth(16)
        .build();
    env.set(
        "loop",
        StackCell::Executable(Block::single(Value::symbol("loop"))),
    );
    let err = env.do_symbol("loop").unwrap_err();
    assert_eq!(err, EvalError::RecursionLimit { limit: 16 });
    assert_eq!(env.runtime.depth(), 0);
}

#[test]
fn builder_print_handler_is_used() {
    let handler = buffer_handler();
    let env = EnvironmentBuilder::new()
        .print_handler(handler.clone())
        .build();
    env.print("hello");
    assert_eq!(handler.get_output(), "hello\n");
    assert!(env.lookup("dbg").is_some());
}

#[test]
fn cell_debug_output() {
    let cell = StackCell::external(NativeFn::new("fail", fail));
    assert_eq!(format!("{cell:?}"), "External(fail)");
    let cell = StackCell::Value(Block::from_operands([num(1), num(2)]));
    assert_eq!(format!("{cell:?}"), "Value([1 2])");
}
