use super::*;
use ifx_eval::{buffer_handler, silent_handler, EvalErrorKind};
use ifx_ir::Value;
use pretty_assertions::assert_eq;

#[test]
fn eval_returns_final_stack() {
    let stack = eval_source("{1 2 3} add 4", &RunOptions::default(), silent_handler()).unwrap();
    let rendered: Vec<String> = stack.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["6", "[4]"]);
}

#[test]
fn eval_routes_dbg_to_handler() {
    let out = buffer_handler();
    eval_source("{a b} dbg", &RunOptions::default(), out.clone()).unwrap();
    assert_eq!(out.get_output(), "[a b]\n");
}

#[test]
fn eval_errors_are_reported() {
    let err = eval_source("nosuchsymbol", &RunOptions::default(), silent_handler()).unwrap_err();
    assert!(matches!(
        err,
        CliError::Eval(ref e) if e.kind() == EvalErrorKind::UndefinedSymbol
    ));
    assert_eq!(err.to_string(), "undefined symbol: nosuchsymbol");
}

#[test]
fn run_options() {
    let options = parse_run_options(["--max-depth=8", "--scale=4"]).unwrap();
    assert_eq!(options.config.max_depth, Some(8));
    assert_eq!(options.config.division_scale, 4);

    let err = parse_run_options(["--max-depth=lots"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid option `--max-depth=lots`");
    assert!(parse_run_options(["--verbose"]).is_err());
}

#[test]
fn scale_option_is_capped() {
    let options = parse_run_options(["--scale=1000"]).unwrap();
    assert_eq!(options.config.division_scale, 1000);

    let err = parse_run_options(["--scale=1001"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid option `--scale=1001`");
    assert!(parse_run_options(["--scale=18446744073709551615"]).is_err());
}

#[test]
fn max_depth_option_limits_recursion() {
    let options = parse_run_options(["--max-depth=1"]).unwrap();
    let err = eval_source("{ {x} do let } do let", &options, silent_handler()).unwrap_err();
    assert!(matches!(
        err,
        CliError::Eval(ref e) if e.root_cause().kind() == EvalErrorKind::RecursionLimit
    ));
}

#[test]
fn scale_option_controls_division() {
    let options = parse_run_options(["--scale=3"]).unwrap();
    let stack = eval_source("{2 3} div", &options, silent_handler()).unwrap();
    assert_eq!(stack, vec![Value::Number("0.667".parse().unwrap())]);
}

#[test]
fn lex_lists_tokens() {
    assert_eq!(
        lex_source("{ab 1}"),
        vec![
            "0..1 quote-open \"{\"",
            "1..3 word \"ab\"",
            "3..4 whitespace \" \"",
            "4..5 number \"1\"",
            "5..6 quote-close \"}\"",
        ]
    );
}

#[test]
fn parse_prints_tree_in_execution_order() {
    assert_eq!(
        parse_tree("{1 {x}} add").unwrap(),
        vec!["block (2)", "  number 1", "  block (1)", "    symbol x", "symbol add"]
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let err = read_file("/nonexistent/program.ifx").unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read `/nonexistent/program.ifx`"));
}
