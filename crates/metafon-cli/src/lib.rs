// metafon-cli: shared utilities for CLI tools.

use std::process;

use metafon_ru::{MetafonError, MetafonHandle};

/// Create a Russian encoder handle or exit with an error message.
pub fn load_handle() -> MetafonHandle {
    MetafonHandle::new("ru").unwrap_or_else(|e: MetafonError| fatal(&e.to_string()))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_flags() {
        let args = vec!["--codes-only".to_string(), "-h".to_string()];
        assert!(wants_help(&args));
        assert!(wants_help(&["--help".to_string()]));
        assert!(!wants_help(&["--codes-only".to_string()]));
        assert!(!wants_help(&[]));
    }

    #[test]
    fn handle_loads() {
        let handle = load_handle();
        assert_eq!(handle.encode("НКО"), "3");
    }
}
