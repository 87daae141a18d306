/// User interface and status output utilities
///
/// Standard output may be the formatted inventory itself, so every status
/// and error message goes to standard error.
use std::io::{IsTerminal, Write};

/// Print the "inventory-fmt: " prefix for status messages
fn print_status_header() {
    eprint!("inventory-fmt: ");
}

/// Print colored text to stderr, with fallback to plain text
/// when stderr is redirected or the terminal lacks color support
fn print_color(s: &str, fg: term::color::Color) {
    if !std::io::stderr().is_terminal() || !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();

        true
    }
}

/// Print a status message with "inventory-fmt: " prefix
pub fn status(s: &str) {
    print_status_header();
    eprintln!("{}", s);
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}
