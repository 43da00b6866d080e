use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let start = Instant::now();
    recursion(&mut out).context("failed to write recursion")?;

    info!(elapsed = ?start.elapsed(), "recursion finished");
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

/// `n!`, wrapping on overflow past `20!`.
fn fact(n: u64) -> u64 {
    if n == 0 { 1 } else { n.wrapping_mul(fact(n - 1)) }
}

/// Naive recursive Fibonacci, `fib(0) == 0`.
fn fib(n: u64) -> u64 {
    if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
}

fn recursion(out: &mut impl Write) -> io::Result<()> {
    debug!("recursion");

    writeln!(out, "{}", fact(7))?;
    writeln!(out, "{}", fib(7))?;

    // A closure can't name itself, an inner fn can. It sees nothing from
    // the enclosing scope, so state is passed in explicitly.
    fn count_down(out: &mut impl Write, n: u32) -> io::Result<()> {
        if n == 0 {
            return writeln!(out, "liftoff");
        }
        writeln!(out, "{}", n)?;
        count_down(out, n - 1)
    }
    count_down(out, 3)
}
