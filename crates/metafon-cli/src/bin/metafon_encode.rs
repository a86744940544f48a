// metafon-encode: compute phonetic fingerprints for words from stdin.
//
// Reads words from stdin (one per line) and prints each word with its
// fingerprint, tab-separated:
//   Иванов	ИФАНАФ
//
// Words with no Cyrillic content produce an empty fingerprint field.
//
// Usage:
//   metafon-encode [OPTIONS]
//
// Options:
//   -c, --codes-only   Print only the fingerprint, without the word
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metafon_cli::wants_help(&args) {
        println!("metafon-encode: compute phonetic fingerprints for words from stdin.");
        println!();
        println!("Usage: metafon-encode [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints each word and its");
        println!("fingerprint, tab-separated. Non-Cyrillic words get an empty code.");
        println!();
        println!("Options:");
        println!("  -c, --codes-only   Print only the fingerprint, without the word");
        println!("  -h, --help         Print this help");
        return;
    }

    let codes_only = args.iter().any(|a| a == "-c" || a == "--codes-only");

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
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let code = handle.encode(word);
        if codes_only {
            let _ = writeln!(out, "{code}");
        } else {
            let _ = writeln!(out, "{word}\t{code}");
        }
    }
}
