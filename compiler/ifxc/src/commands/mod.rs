//! CLI commands.
//!
//! Each command returns its output instead of printing it; `main` decides
//! where it goes.

mod debug;
mod run;

use std::path::PathBuf;

use ifx_eval::EvalError;
use ifx_parse::ParseError;
use thiserror::Error;

pub use debug::{lex_source, parse_tree};
pub use run::{eval_source, parse_run_options, RunOptions};

/// Anything that stops a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("invalid option `{0}`")]
    InvalidOption(String),
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
