use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Calls [`sum`] with any number of trailing integer arguments.
macro_rules! sum {
    ($out:expr $(, $num:expr)*) => {
        sum($out, &[$($num),*])
    };
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    arithmetic(&mut out).context("failed to write arithmetic")?;
    multiple_returns(&mut out).context("failed to write multiple returns")?;
    variadic(&mut out).context("failed to write variadic calls")?;

    info!("functions finished");
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

// Every parameter carries its own type, the tail expression is the return value.
// Overflow wraps around instead of panicking.
fn plus(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

fn plus_plus(a: i64, b: i64, c: i64) -> i64 {
    a.wrapping_add(b).wrapping_add(c)
}

// Two results without a named container type
fn vals() -> (i64, i64) {
    (3, 7)
}

/// Renders `nums` space separated inside brackets, e.g. `[1 2 3]`.
fn bracketed(nums: &[i64]) -> String {
    let items: Vec<String> = nums.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(" "))
}

/// Writes `nums` followed by a space, then their wrapping total on the same
/// line. Returns the total.
fn sum(out: &mut impl Write, nums: &[i64]) -> io::Result<i64> {
    write!(out, "{} ", bracketed(nums))?;
    let total = nums.iter().copied().fold(0i64, i64::wrapping_add);
    writeln!(out, "{}", total)?;
    debug!(count = nums.len(), total, "sum");
    Ok(total)
}

fn arithmetic(out: &mut impl Write) -> io::Result<()> {
    let res = plus(1, 2);
    writeln!(out, "1+2 = {}", res)?;

    let res = plus_plus(1, 2, 3);
    writeln!(out, "1+2+3 = {}", res)?;
    Ok(())
}

fn multiple_returns(out: &mut impl Write) -> io::Result<()> {
    let (a, b) = vals();
    writeln!(out, "{}", a)?;
    writeln!(out, "{}", b)?;

    // `_` drops the value we don't need
    let (_, c) = vals();
    writeln!(out, "{}", c)?;
    Ok(())
}

fn variadic(out: &mut impl Write) -> io::Result<()> {
    sum!(out, 1, 2)?;
    sum!(out, 1, 2, 3)?;

    // an existing collection goes in as a slice
    let nums = vec![1, 2, 3, 4];
    sum(out, &nums)?;
    Ok(())
}
