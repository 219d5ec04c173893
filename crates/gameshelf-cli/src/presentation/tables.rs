//! Table formatting utilities for CLI output.

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use gameshelf_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Zelda", 10), "Zelda");
/// assert_eq!(truncate_string("Chrono Trigger", 9), "Chrono...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

/// Print `(id, name)` rows under a heading.
pub fn print_named_table<'a>(label: &str, rows: impl IntoIterator<Item = (i64, &'a str)>) {
    let rows: Vec<_> = rows.into_iter().collect();
    if rows.is_empty() {
        println!("No {label} found.");
        return;
    }

    println!("{:<6} Name", "ID");
    print_separator(40);
    for (id, name) in rows {
        println!("{id:<6} {}", truncate_string(name, 33));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("Pokémon Émeraude", 8), "Pokém...");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(&42), "--"), "42");
        assert_eq!(format_optional::<i32>(None, "--"), "--");
    }
}
