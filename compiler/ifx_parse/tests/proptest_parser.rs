//! Property-based tests for the structural parser.

use ifx_ir::{Block, Value};
use ifx_parse::parse_source;
use proptest::prelude::*;

/// Render a value back to source, in written order.
fn render(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Symbol(s) => s.to_string(),
        Value::Block(b) => {
            let inner: Vec<String> = b.operands().map(render).collect();
            format!("{{{}}}", inner.join(" "))
        }
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        (0u32..10_000).prop_map(|n| Value::from(i64::from(n))),
        "[a-z_$][a-z0-9_]{1,6}".prop_map(|s| Value::symbol(&s)),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(|items| Value::Block(Block::from_operands(items)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn written_order_round_trips(values in prop::collection::vec(arb_value(), 0..6)) {
        let source: Vec<String> = values.iter().map(render).collect();
        let program = parse_source(&source.join(" ")).unwrap_or_default();

        // The program stack, read from the top, is the written sequence.
        let read_back: Vec<Value> = program.into_iter().rev().collect();
        prop_assert_eq!(read_back, values);
    }

    #[test]
    fn arbitrary_brace_soup_terminates(source in "[{} ab1]{0,80}") {
        prop_assert!(parse_source(&source).is_ok());
    }
}
