//! Backslash escaping for text, structured and list values.

/// Escapes a text value.
///
/// Backslash, comma and semicolon get a leading backslash; line breaks
/// (`\n`, `\r\n` or a lone `\r`) become `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }

    result
}

/// Unescapes a text value.
///
/// Accepts `\n`, `\N` (newline), `\,`, `\;`, `\:` and `\\`. Unknown escapes
/// are kept as written.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&next @ (',' | ';' | ':' | '\\')) => {
                    chars.next();
                    result.push(next);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Escapes a single separator character and the backslash itself.
#[must_use]
pub fn escape_separator(s: &str, sep: char) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '\\' || c == sep {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Reverses [`escape_separator`]. Other escapes are left untouched.
#[must_use]
pub fn unescape_separator(s: &str, sep: char) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && (next == '\\' || next == sep)
        {
            chars.next();
            result.push(next);
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits on unescaped `sep` and unescapes each part as text.
///
/// An escaped separator never splits. Empty input yields one empty part.
#[must_use]
pub fn split_escaped(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            current.push(c);
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if c == sep {
            parts.push(unescape_text(&current));
            current.clear();
        } else {
            current.push(c);
        }
    }

    parts.push(unescape_text(&current));
    parts
}

/// Escapes each part as text and joins them with `sep`.
#[must_use]
pub fn join_escaped<S: AsRef<str>>(parts: &[S], sep: char) -> String {
    let mut result = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            result.push(sep);
        }
        result.push_str(&escape_text(part.as_ref()));
    }
    result
}
