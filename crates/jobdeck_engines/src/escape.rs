#![forbid(unsafe_code)]

/// Escapes a string for safe embedding into rendered markup. The five
/// metacharacters `& < > " '` become their named character references; every
/// input character is escaped exactly once. Applied to every user-supplied or
/// stored string before it lands in a card.
pub fn escape_markup_str(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Absent values render as the empty string.
pub fn escape_markup(raw: Option<&str>) -> String {
    raw.map(escape_markup_str).unwrap_or_default()
}

/// Escapes any displayable value through its string form. A numeric zero
/// renders as `"0"`, never as empty.
pub fn escape_display(value: impl std::fmt::Display) -> String {
    escape_markup_str(&value.to_string())
}
