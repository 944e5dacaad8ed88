//! Output helper functions for consistent styled messages.

use super::colors::SemanticStyle;

/// Prints an allowed outcome with a checkmark.
pub fn print_allowed(msg: &str) {
    println!("{} {}", "✓".success(), msg.success());
}

/// Prints a denied outcome with an X mark.
pub fn print_denied(msg: &str) {
    println!("{} {}", "✗".error(), msg.error());
}

/// Prints a labeled key-value pair with proper indentation.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {}", key.muted(), value);
}

/// Prints a section heading followed by a blank line.
pub fn print_heading(title: &str) {
    println!("{}", title.header());
    println!();
}
