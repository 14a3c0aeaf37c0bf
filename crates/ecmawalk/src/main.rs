//! ecmawalk runner
//!
//! Evaluates the ESTree document at `input.json` in the working directory.
//! Console output goes to stdout; diagnostics and errors go to stderr.
//!
//! Enable logging with `RUST_LOG=ecmawalk=debug` or `RUST_LOG=ecmawalk=trace`.

use std::process::ExitCode;

use anyhow::Context;
use ecmawalk::{Environment, EstreeFrontend, EvalContext, Frontend, Visit};

/// Fixed location of the parser's output.
const INPUT_PATH: &str = "input.json";

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let source = std::fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("failed to read {}", INPUT_PATH))?;

    let frontend = EstreeFrontend::with_source_name(INPUT_PATH);
    let program = frontend.parse(&source)?;

    let mut env = Environment::new();
    let ctx = EvalContext::new();

    let value = program
        .visit(&mut env, &ctx)
        .map_err(|e| anyhow::anyhow!(frontend.format_error(&e, &source)))?;
    tracing::debug!(result = ?value, bindings = env.len(), "program finished");

    Ok(())
}
