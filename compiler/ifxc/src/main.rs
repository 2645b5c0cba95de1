//! ifexpr CLI

use std::process::ExitCode;

use ifxc::commands::{
    eval_source, lex_source, parse_run_options, parse_tree, read_file, CliError,
};
use ifxc::init_tracing;

fn print_usage() {
    eprintln!("Usage: ifx <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file> [options]    Run a source file and print the final stack");
    eprintln!("  eval <expr> [options]   Run an expression and print the final stack");
    eprintln!("  lex <file>              Print the token stream");
    eprintln!("  parse <file>            Print the value tree");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-depth=<n>         Fail after <n> nested dispatches");
    eprintln!("  --scale=<n>             Fractional digits kept by divide (default 20, max 1000)");
    eprintln!();
    eprintln!("Set IFX_LOG (e.g. IFX_LOG=ifx_eval=trace) to enable logging.");
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "run" | "eval" if args.len() < 3 => {
            eprintln!("Usage: ifx {} <input> [options]", args[1]);
            return ExitCode::FAILURE;
        }
        "run" => read_file(&args[2]).and_then(|source| run(&source, &args[3..])),
        "eval" => run(&args[2], &args[3..]),
        "lex" | "parse" if args.len() < 3 => {
            eprintln!("Usage: ifx {} <file>", args[1]);
            return ExitCode::FAILURE;
        }
        "lex" => read_file(&args[2]).map(|source| print_lines(&lex_source(&source))),
        "parse" => read_file(&args[2])
            .and_then(|source| parse_tree(&source))
            .map(|lines| print_lines(&lines)),
        "-h" | "--help" | "help" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {cmd}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(source: &str, options: &[String]) -> Result<(), CliError> {
    let options = parse_run_options(options.iter().map(String::as_str))?;
    let stack = eval_source(source, &options, ifx_eval::stderr_handler())?;
    for value in &stack {
        println!("{value}");
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn report(err: &CliError) {
    eprintln!("error: {err}");
    if let CliError::Eval(eval) = err {
        for symbol in eval.external_trace() {
            eprintln!("  in `{symbol}`");
        }
    }
}
