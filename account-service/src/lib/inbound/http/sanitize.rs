//! Input sanitation applied to every submitted form field.
//!
//! Fields are trimmed and HTML-special characters replaced with entities
//! before validation. The sanitized value is the one stored and compared.

/// Trim surrounding whitespace and escape HTML-special characters.
pub fn sanitize(raw: &str) -> String {
    escape(raw.trim())
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
