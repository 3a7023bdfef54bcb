//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for trees and TOML)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One outline section: indented by level, id highlighted.
pub fn format_section(level: u32, id: &str, msg: &(impl std::fmt::Display + ?Sized)) -> String {
    let indent = "  ".repeat(level.saturating_sub(1) as usize);
    format!("{}{} -> {}", indent, id.cyan(), msg)
}

/// Print one outline section line (indented by level)
pub fn section(level: u32, id: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", format_section(level, id, msg));
}

/// Top-down chapter path, `A [1] > B [1-2]`.
pub fn format_breadcrumb<T: std::fmt::Display>(crumbs: &[T]) -> String {
    let sep = format!(" {} ", ">".dimmed());
    crumbs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep.as_str())
}

/// Print a chapter path
pub fn breadcrumb<T: std::fmt::Display>(crumbs: &[T]) {
    println!("{}", format_breadcrumb(crumbs));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_section_when_formatting_then_indented_by_level() {
        colored::control::set_override(false);
        assert_eq!(format_section(1, "1", "Porto_Food.docx"), "1 -> Porto_Food.docx");
        assert_eq!(format_section(3, "1-1-1", "x"), "    1-1-1 -> x");
    }

    #[test]
    fn given_crumbs_when_formatting_breadcrumb_then_joined_top_down() {
        colored::control::set_override(false);
        assert_eq!(format_breadcrumb(&["Food [2]", "Markets [2-1]"]), "Food [2] > Markets [2-1]");
        assert_eq!(format_breadcrumb::<&str>(&[]), "");
    }
}
