//! CLI argument parsing.

use std::io;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print usage information
pub fn print_usage() {
    eprintln!("principles-tui - Terminal guide to software design principles");
    eprintln!();
    eprintln!("Usage: principles-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help     Show this help message");
    eprintln!("  -V, --version  Show version");
    eprintln!();
    eprintln!("Keys (inside the UI):");
    eprintln!("  Tab / Shift-Tab, Left/Right, 1-4   Switch view");
    eprintln!("  Up/Down (or k/j)                   Scroll");
    eprintln!("  Enter (on Overview)                Jump to the exercises");
    eprintln!("  s / d (on Resources)               Open source repo / guide");
    eprintln!("  q or Esc                           Quit");
}

/// Parse CLI arguments. The UI takes no options that change behavior;
/// every launch starts on the Overview tab.
pub fn parse_args() -> io::Result<()> {
    for arg in std::env::args().skip(1) {
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("principles-tui {}", VERSION);
            std::process::exit(0);
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }
    Ok(())
}
