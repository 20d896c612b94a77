use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

fn print_tagged(color: &str, icon: &str, msg: impl fmt::Display) {
    println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    print_tagged(FG_BLUE, "ℹ️", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    print_tagged(FG_GREEN, "✅", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    print_tagged(FG_YELLOW, "⚠️", msg);
}

/// Section header for tabular output.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", FG_BLUE, BOLD, msg, RESET);
}
