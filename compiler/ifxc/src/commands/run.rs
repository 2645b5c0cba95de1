//! The `run` and `eval` commands: evaluate a program and report the final
//! operand stack.

use ifx_eval::{EnvironmentBuilder, EvalConfig, SharedPrintHandler, MAX_DIVISION_SCALE};
use ifx_ir::Value;
use ifx_parse::parse_source;
use tracing::debug;

use super::CliError;

/// Options shared by `run` and `eval`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config: EvalConfig,
}

/// Parse `--max-depth=<n>` and `--scale=<n>`. A scale above
/// [`MAX_DIVISION_SCALE`] is rejected.
pub fn parse_run_options<'a, I>(args: I) -> Result<RunOptions, CliError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options = RunOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse()
                .map_err(|_| CliError::InvalidOption(arg.to_string()))?;
            options.config = options.config.with_max_depth(depth);
        } else if let Some(value) = arg.strip_prefix("--scale=") {
            let scale = value
                .parse::<u64>()
                .ok()
                .filter(|scale| *scale <= MAX_DIVISION_SCALE)
                .ok_or_else(|| CliError::InvalidOption(arg.to_string()))?;
            options.config = options.config.with_division_scale(scale);
        } else {
            return Err(CliError::InvalidOption(arg.to_string()));
        }
    }
    Ok(options)
}

/// Evaluate `source` in a fresh root and return its operand stack, bottom
/// first. `dbg` writes to `print`.
pub fn eval_source(
    source: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
) -> Result<Vec<Value>, CliError> {
    let program = parse_source(source)?;
    debug!(values = program.len(), "parsed program");
    let mut env = EnvironmentBuilder::new()
        .config(options.config)
        .print_handler(print)
        .build();
    env.execute(&program)?;
    Ok(env.into_stack())
}
