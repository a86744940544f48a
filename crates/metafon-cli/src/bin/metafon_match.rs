// metafon-match: compare word pairs phonetically.
//
// Reads two whitespace-separated words per stdin line and reports whether
// they collapse to the same fingerprint:
//   M: Пётр Петр      (match)
//   D: Иванов Петров  (differ)
//
// Lines without exactly two words are reported on stderr and skipped.
//
// Usage:
//   metafon-match [OPTIONS]
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metafon_cli::wants_help(&args) {
        println!("metafon-match: compare word pairs phonetically.");
        println!();
        println!("Usage: metafon-match [OPTIONS]");
        println!();
        println!("Reads two whitespace-separated words per stdin line. Prints:");
        println!("  M: a b    (words sound alike)");
        println!("  D: a b    (words differ)");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let handle = metafon_cli::load_handle();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let &[a, b] = words.as_slice() else {
            eprintln!("skipping line (expected two words): {line}");
            continue;
        };

        if handle.matches(a, b) {
            let _ = writeln!(out, "M: {a} {b}");
        } else {
            let _ = writeln!(out, "D: {a} {b}");
        }
    }
}
