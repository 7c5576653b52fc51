//! Terminal styling: semantic colors, message helpers, and tables.

use std::sync::atomic::{AtomicBool, Ordering};

use colors::SemanticStyle;

pub mod colors;
pub mod table;

pub use table::*;

static PLAIN: AtomicBool = AtomicBool::new(false);

/// Turns color output off for the rest of the process (`--no-color`).
pub fn set_no_color(value: bool) {
    PLAIN.store(value, Ordering::Relaxed);
}

pub fn no_color() -> bool {
    PLAIN.load(Ordering::Relaxed)
}

/// `✓ msg` on stdout.
pub fn print_success(msg: &str) {
    println!("{} {msg}", "✓".success());
}

/// `✗ msg` on stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {msg}", "✗".error());
}

pub fn print_hint(msg: &str) {
    println!("{} {}", "→".muted(), msg.muted());
}

/// Indented `key: value` line.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {value}", key.muted());
}

pub fn print_code_example(cmd: &str) {
    println!("    {}", cmd.code());
}

pub fn print_spacer() {
    println!();
}
