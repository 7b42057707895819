//! Terminal output formatting for the brandmark CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. Progress
//! goes to stdout, warnings and errors go to stderr. Each stream is
//! coloured only when it is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Terminal-aware status printer.
pub struct Printer {
    stdout_color: bool,
    stderr_color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            stdout_color: io::stdout().is_terminal(),
            stderr_color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            stdout_color: false,
            stderr_color: false,
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "   Generated public/logo.png (500x500)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stdout, GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stdout, GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stdout, CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stderr, YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stderr, RED, verb, message);
    }

    /// Print a free-form line to stderr.
    pub fn note(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{message}");
    }

    /// Format a string as dim/grey for stdout.
    pub fn dim(&self, text: &str) -> String {
        paint(self.stdout_color, DIM, text)
    }

    /// Format a string as bold for stdout.
    pub fn bold(&self, text: &str) -> String {
        paint(self.stdout_color, BOLD, text)
    }

    /// Format a string as cyan (for paths) for stdout.
    pub fn cyan(&self, text: &str) -> String {
        paint(self.stdout_color, CYAN, text)
    }

    /// Format a diagnostic severity label for stderr.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.stderr_color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn print_line(&self, stream: Stream, color: &str, verb: &str, message: &str) {
        let line = format_line(self.color_for(stream), color, verb, message);
        match stream {
            Stream::Stdout => {
                let _ = writeln!(io::stdout().lock(), "{line}");
            }
            Stream::Stderr => {
                let _ = writeln!(io::stderr().lock(), "{line}");
            }
        }
    }

    fn color_for(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => self.stdout_color,
            Stream::Stderr => self.stderr_color,
        }
    }
}

fn paint(enabled: bool, code: &str, text: &str) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn format_line(color_enabled: bool, color: &str, verb: &str, message: &str) -> String {
    if color_enabled {
        format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
    } else {
        format!("{verb:>VERB_WIDTH$} {message}")
    }
}

/// Pluralize a count: `plural(1, "file", "files")` → "1 file".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
