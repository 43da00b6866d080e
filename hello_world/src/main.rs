use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    hello(&mut out).context("failed to write greeting")?;
    values(&mut out).context("failed to write values")?;
    variables(&mut out).context("failed to write variables")?;

    info!("hello_world finished");
    Ok(())
}

// Diagnostics go to stderr so stdout only carries the demo text.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn hello(out: &mut impl Write) -> io::Result<()> {
    debug!("hello");
    writeln!(out, "Hello World")
}

// Strings, numbers and booleans
fn values(out: &mut impl Write) -> io::Result<()> {
    debug!("values");

    // String + &str appends onto the owned left side
    let joined = String::from("go") + "lang";
    writeln!(out, "{}", joined)?;

    writeln!(out, "1+1 = {}", 1 + 1)?;
    writeln!(out, "7.0/3.0 = {}", 7.0 / 3.0)?;
    // no implicit int -> float promotion, the literal has to be a float
    writeln!(out, "1 + 1.0 = {}", 1.0 + 1.0)?;

    // && binds tighter than ||
    writeln!(out, "{}", !true || true && false)?;
    writeln!(out, "{}", true && false)?;
    writeln!(out, "{}", true || false)?;
    writeln!(out, "{}", !true)?;
    Ok(())
}

fn variables(out: &mut impl Write) -> io::Result<()> {
    debug!("variables");

    let a = "this is a var";
    writeln!(out, "{}", a)?;

    // several bindings at once, type written once for the pair
    let (b, c): (i64, i64) = (1, 2);
    writeln!(out, "{} {}", b, c)?;

    let d = true;
    writeln!(out, "{}", d)?;

    // the zero value comes from Default
    let e = i64::default();
    writeln!(out, "{}", e)?;

    let mut f = "apple";
    writeln!(out, "{}", f)?;
    f = "banana";
    writeln!(out, "{}", f)?;

    // shadowing rebinds the name, even with a new type
    let f = f.len();
    writeln!(out, "{}", f)?;
    Ok(())
}
