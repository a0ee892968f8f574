//! ANSI color helpers for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if the terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold and colored, for labels and headings
pub fn emphasize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}{}", color, Colors::BOLD, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Check if stdout is a terminal that accepts ANSI escapes
pub fn supports_formatting() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Disable formatting when running tests
    if cfg!(test) || std::env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    if !stdout_is_terminal() {
        return false;
    }

    match std::env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => false,
    }
}

pub fn stdout_is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn stdin_is_terminal() -> bool {
    atty::is(atty::Stream::Stdin)
}
