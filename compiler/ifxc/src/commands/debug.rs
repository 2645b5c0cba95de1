//! Debug commands: `lex` and `parse` for inspecting the front end.

use ifx_ir::Value;
use ifx_lexer::tokenize;
use ifx_parse::parse_source;

use super::CliError;

/// One line per token.
pub fn lex_source(source: &str) -> Vec<String> {
    tokenize(source).map(|token| token.to_string()).collect()
}

/// The value tree, one top-level value per line in execution order, nested
/// blocks indented beneath their parent.
pub fn parse_tree(source: &str) -> Result<Vec<String>, CliError> {
    let program = parse_source(source)?;
    let mut lines = Vec::new();
    for value in program.iter().rev() {
        push_tree(&mut lines, value, 0);
    }
    Ok(lines)
}

fn push_tree(lines: &mut Vec<String>, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Block(block) => {
            lines.push(format!("{indent}block ({})", block.len()));
            for inner in block.operands() {
                push_tree(lines, inner, depth + 1);
            }
        }
        Value::Number(n) => lines.push(format!("{indent}number {n}")),
        Value::Symbol(s) => lines.push(format!("{indent}symbol {s}")),
    }
}
