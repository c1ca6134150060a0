//! Formatting helpers for table cells

/// Placeholder for empty cells
pub const EMPTY_CELL: &str = "—";

/// Text cell: trims, and shows the placeholder for missing or blank values
pub fn format_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

/// Multi-line API text (artist display) squeezed onto one line
pub fn format_single_line(value: Option<&str>) -> String {
    let joined = value.map(|v| {
        v.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    });
    format_text(joined.as_deref())
}

/// Year cell; the API uses negative years for BCE dates and they are shown as is
pub fn format_year(value: Option<i32>) -> String {
    value
        .map(|y| y.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Integer with a space as thousands separator
///
/// # Example
///
/// ```
/// use frontend::shared::components::table::format_count;
/// assert_eq!(format_count(125_386), "125 386");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}
