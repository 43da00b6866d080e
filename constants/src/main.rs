use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const S: &str = "constant";

// Constant expressions are folded at compile time, N never exists at runtime
// as a variable.
const N: i64 = 500_000_000;
const D: f64 = 3e20 / N as f64;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    constants(&mut out).context("failed to write constants")?;

    info!("constants finished");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn constants(out: &mut impl Write) -> io::Result<()> {
    debug!(n = N, d = D, "constants");

    writeln!(out, "{}", S)?;
    writeln!(out, "{}", N)?;
    writeln!(out, "{}", D)?;
    // explicit conversion, nothing is converted implicitly
    writeln!(out, "{}", D as i64)?;
    writeln!(out, "{}", (N as f64).sin())?;
    Ok(())
}
