use std::fmt;
use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// A value whose kind is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    loops(&mut out).context("failed to write loops")?;
    if_else(&mut out).context("failed to write if/else")?;
    switches(&mut out).context("failed to write switches")?;

    info!("control_flow finished");
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

// the break-only loop is deliberate
#[allow(clippy::never_loop)]
fn loops(out: &mut impl Write) -> io::Result<()> {
    debug!("loops");

    // condition only
    let mut i = 1;
    while i <= 3 {
        writeln!(out, "{}", i)?;
        i += 1;
    }

    // init; condition; step
    for j in 0..3 {
        writeln!(out, "{}", j)?;
    }

    // over a collection, with the index
    for (idx, n) in [2, 3, 4].iter().enumerate() {
        writeln!(out, "range {} {}", idx, n)?;
    }

    // runs until break
    loop {
        writeln!(out, "loop")?;
        break;
    }

    for n in 0..6 {
        if n % 2 == 0 {
            continue;
        }
        writeln!(out, "{}", n)?;
    }
    Ok(())
}

/// Classifies a number by sign and digit count.
fn digits(num: i64) -> String {
    if num < 0 {
        format!("{} is negative", num)
    } else if num < 10 {
        format!("{} has 1 digit", num)
    } else {
        format!("{} has multiple digits", num)
    }
}

fn if_else(out: &mut impl Write) -> io::Result<()> {
    debug!("if/else");

    let (seven, eight) = (7, 8);

    if seven % 2 == 0 {
        writeln!(out, "{} is even", seven)?;
    } else {
        writeln!(out, "{} is odd", seven)?;
    }

    if eight % 4 == 0 {
        writeln!(out, "{} is divisible by 4", eight)?;
    }

    if eight % 2 == 0 || seven % 2 == 0 {
        writeln!(out, "either {} or {} are even", eight, seven)?;
    }

    // num is scoped to the block, like an if with an initializer
    {
        let num = 9;
        writeln!(out, "{}", digits(num))?;
    }

    // if is an expression
    let three = 3;
    let parity = if three % 2 == 0 { "even" } else { "odd" };
    writeln!(out, "{} is {}", three, parity)?;
    Ok(())
}

fn number_name(i: i64) -> &'static str {
    match i {
        1 => "one",
        2 => "two",
        3 => "three",
        _ => "many",
    }
}

fn day_kind(day: Weekday) -> &'static str {
    match day {
        Weekday::Saturday | Weekday::Sunday => "It's the weekend",
        _ => "It's a weekday",
    }
}

// match on guards alone stands in for a switch without a subject
fn time_of_day(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => "It's before noon",
        _ => "It's after noon",
    }
}

fn what_am_i(value: &Value) -> String {
    match value {
        Value::Bool(_) => "I'm a bool".to_string(),
        Value::Int(_) => "I'm an int".to_string(),
        other => format!("Don't know type {}", other.type_name()),
    }
}

fn switches(out: &mut impl Write) -> io::Result<()> {
    debug!("switches");

    let i = 2;
    writeln!(out, "Write {} as {}", i, number_name(i))?;

    for day in Weekday::ALL {
        writeln!(out, "{:?}: {}", day, day_kind(day))?;
    }

    for hour in [9, 14] {
        writeln!(out, "{}:00 {}", hour, time_of_day(hour))?;
    }

    let values = [Value::Bool(true), Value::Int(1), Value::Str("hey".to_string())];
    for value in &values {
        writeln!(out, "{}: {}", value, what_am_i(value))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_loops_output() {
        let mut buf = Vec::new();
        loops(&mut buf).unwrap();
        let expected = "1\n2\n3\n0\n1\n2\nrange 0 2\nrange 1 3\nrange 2 4\nloop\n1\n3\n5\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(-4), "-4 is negative");
        assert_eq!(digits(9), "9 has 1 digit");
        assert_eq!(digits(0), "0 has 1 digit");
        assert_eq!(digits(42), "42 has multiple digits");
    }

    #[test]
    fn test_if_else_output() {
        let mut buf = Vec::new();
        if_else(&mut buf).unwrap();
        let expected = "7 is odd\n8 is divisible by 4\neither 8 or 7 are even\n9 has 1 digit\n3 is odd\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_number_name() {
        assert_eq!(number_name(2), "two");
        assert_eq!(number_name(7), "many");
    }

    #[test]
    fn test_day_kind() {
        let weekend: Vec<Weekday> = Weekday::ALL
            .into_iter()
            .filter(|d| day_kind(*d) == "It's the weekend")
            .collect();
        assert_eq!(weekend, vec![Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(time_of_day(0), "It's before noon");
        assert_eq!(time_of_day(11), "It's before noon");
        assert_eq!(time_of_day(12), "It's after noon");
    }

    #[test]
    fn test_what_am_i() {
        assert_eq!(what_am_i(&Value::Bool(false)), "I'm a bool");
        assert_eq!(what_am_i(&Value::Int(-3)), "I'm an int");
        assert_eq!(
            what_am_i(&Value::Str("hey".to_string())),
            "Don't know type string"
        );
    }

    #[test]
    fn test_switches_output_tail() {
        let mut buf = Vec::new();
        switches(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Write 2 as two");
        assert_eq!(lines[6], "Saturday: It's the weekend");
        assert_eq!(lines[8], "9:00 It's before noon");
        assert_eq!(lines[9], "14:00 It's after noon");
        assert_eq!(&lines[10..], ["true: I'm a bool", "1: I'm an int", "\"hey\": Don't know type string"]);
    }
}
