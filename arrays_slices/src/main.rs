use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    arrays(&mut out).context("failed to write arrays")?;
    slices(&mut out).context("failed to write slices")?;

    info!("arrays_slices finished");
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

// ========== ARRAYS ==========

/// Fills a fixed `ROWS` x `COLS` grid with `i + j`.
fn grid<const ROWS: usize, const COLS: usize>() -> [[usize; COLS]; ROWS] {
    let mut two_d = [[0; COLS]; ROWS];
    for (i, row) in two_d.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = i + j;
        }
    }
    two_d
}

fn arrays(out: &mut impl Write) -> io::Result<()> {
    debug!("arrays");

    // length is part of the type, elements start at their zero value
    let mut a = [0i64; 5];
    writeln!(out, "emp: {:?}", a)?;

    a[4] = 100;
    writeln!(out, "set: {:?}", a)?;
    writeln!(out, "get: {}", a[4])?;
    writeln!(out, "len: {}", a.len())?;

    let b = [1, 2, 3, 4, 5];
    writeln!(out, "dcl: {:?}", b)?;

    let two_d = grid::<2, 3>();
    writeln!(out, "2d: {:?}", two_d)?;
    Ok(())
}

// ========== SLICES ==========

/// Three empty strings, `"a"` at index 0, then four appended values.
/// Indices 1 and 2 are never written and keep their zero value.
fn appended() -> Vec<String> {
    let mut s = vec![String::new(); 3];
    s[0] = "a".to_string();
    s.push("b".to_string());
    s.extend(["c", "d", "e"].map(String::from));
    s
}

/// Jagged grid: row `i` holds `i + 1` elements, each `i + j`.
fn jagged(rows: usize) -> Vec<Vec<usize>> {
    let mut two_d = Vec::with_capacity(rows);
    for i in 0..rows {
        let inner_len = i + 1;
        let mut row = vec![0; inner_len];
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = i + j;
        }
        two_d.push(row);
    }
    two_d
}

fn slices(out: &mut impl Write) -> io::Result<()> {
    debug!("slices");

    let empty: Vec<String> = Vec::new();
    writeln!(out, "uninit: {:?} {} {}", empty, empty.is_empty(), empty.len())?;

    let mut s = vec![String::new(); 3];
    writeln!(out, "emp: {:?} len: {} cap: {}", s, s.len(), s.capacity())?;

    s[0] = "a".to_string();
    writeln!(out, "set: {:?}", s)?;
    writeln!(out, "get: {}", s[0])?;
    writeln!(out, "len: {}", s.len())?;

    let s = appended();
    writeln!(out, "apd: {:?}", s)?;

    // clone_from_slice needs equal lengths, like copying into a made slice
    let mut c = vec![String::new(); s.len()];
    c.clone_from_slice(&s);
    writeln!(out, "cpy: {:?}", c)?;

    // half-open ranges: low is included, high is not
    writeln!(out, "sl1: {:?}", &s[2..5])?;
    writeln!(out, "sl2: {:?}", &s[..5])?;
    writeln!(out, "sl3: {:?}", &s[2..])?;

    let t = vec!["g", "h", "i"];
    writeln!(out, "dcl: {:?}", t)?;

    let t2 = vec!["g", "h", "i"];
    if t == t2 {
        writeln!(out, "t == t2")?;
    }

    writeln!(out, "2d: {:?}", jagged(3))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grid() {
        assert_eq!(grid::<2, 3>(), [[0, 1, 2], [1, 2, 3]]);
        assert_eq!(grid::<3, 1>(), [[0], [1], [2]]);
        assert_eq!(grid::<0, 4>().len(), 0);
    }

    #[test]
    fn test_appended_leaves_gap() {
        let s = appended();
        assert_eq!(s.len(), 7);
        assert_eq!(s[0], "a");
        assert!(s[1].is_empty());
        assert!(s[2].is_empty());
        assert_eq!(&s[3..], ["b", "c", "d", "e"]);
    }

    #[test]
    fn test_half_open_slicing() {
        let s = appended();
        assert_eq!(&s[2..5], ["", "b", "c"]);
        assert_eq!(&s[..5], ["a", "", "", "b", "c"]);
        assert_eq!(&s[2..], ["", "b", "c", "d", "e"]);
        assert!(s[3..3].is_empty());
    }

    #[test]
    fn test_jagged() {
        assert_eq!(jagged(3), vec![vec![0], vec![1, 2], vec![2, 3, 4]]);
        assert!(jagged(0).is_empty());
    }

    #[test]
    fn test_arrays_output() {
        let mut buf = Vec::new();
        arrays(&mut buf).unwrap();
        let expected = "emp: [0, 0, 0, 0, 0]\n\
                        set: [0, 0, 0, 0, 100]\n\
                        get: 100\n\
                        len: 5\n\
                        dcl: [1, 2, 3, 4, 5]\n\
                        2d: [[0, 1, 2], [1, 2, 3]]\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_slices_output() {
        let mut buf = Vec::new();
        slices(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("uninit: [] true 0\n"));
        assert!(text.contains("apd: [\"a\", \"\", \"\", \"b\", \"c\", \"d\", \"e\"]\n"));
        assert!(text.contains("cpy: [\"a\", \"\", \"\", \"b\", \"c\", \"d\", \"e\"]\n"));
        assert!(text.contains("sl1: [\"\", \"b\", \"c\"]\n"));
        assert!(text.contains("t == t2\n"));
        assert!(text.ends_with("2d: [[0], [1, 2], [2, 3, 4]]\n"));
    }
}
