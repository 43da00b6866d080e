use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    counters(&mut out).context("failed to write counters")?;
    captures(&mut out).context("failed to write captures")?;

    info!("closures finished");
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

/// Returns a counter that yields 1, 2, 3, ... on successive calls.
///
/// The count is moved into the closure, so every call to `int_seq`
/// gets its own independent counter.
fn int_seq() -> impl FnMut() -> i64 {
    let mut i = 0;
    move || {
        i += 1;
        i
    }
}

fn counters(out: &mut impl Write) -> io::Result<()> {
    debug!("counters");

    let mut next_int = int_seq();
    writeln!(out, "{}", next_int())?;
    writeln!(out, "{}", next_int())?;
    writeln!(out, "{}", next_int())?;

    let mut new_ints = int_seq();
    writeln!(out, "{}", new_ints())?;
    Ok(())
}

// Borrowing vs. mutably borrowing the enclosing scope
fn captures(out: &mut impl Write) -> io::Result<()> {
    debug!("captures");

    let base = 100;
    let add_base = |n: i64| n + base;
    writeln!(out, "{}", add_base(5))?;

    let mut hits = 0;
    let mut hit = || hits += 1;
    hit();
    hit();
    writeln!(out, "hits: {}", hits)?;
    Ok(())
}
