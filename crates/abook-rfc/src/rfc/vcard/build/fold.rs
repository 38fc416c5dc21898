//! vCard line folding.

/// Maximum line length in octets (not characters).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space.
/// Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            current_len = 1; // The space
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Folds a quoted-printable line using `=` soft breaks.
///
/// `head` is the `NAME;PARAMS:` part and is never broken. Continuation lines
/// carry no leading space and `=XY` triplets are kept whole.
#[must_use]
pub fn fold_quoted_printable(head: &str, encoded: &str) -> String {
    if head.len() + encoded.len() <= MAX_LINE_OCTETS {
        return format!("{head}{encoded}");
    }

    let mut result = String::with_capacity(head.len() + encoded.len() * 2);
    result.push_str(head);
    let mut current_len = head.len();
    let mut rest = encoded;

    while !rest.is_empty() {
        let token_len = if rest.starts_with('=') { 3.min(rest.len()) } else { 1 };
        // Leave room for the trailing '='
        if current_len + token_len > MAX_LINE_OCTETS - 1 && current_len > 0 {
            result.push_str("=\r\n");
            current_len = 0;
        }
        let (token, tail) = rest.split_at(token_len);
        result.push_str(token);
        current_len += token_len;
        rest = tail;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);
        assert!(folded.contains("\r\n "));

        // First segment should be 75 chars
        let first_line: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first_line.len(), 75);
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30)); // 5 + 90 bytes
        let folded = fold_line(&line);

        for part in folded.split("\r\n ") {
            assert!(part.len() <= 75);
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn fold_multiple_times() {
        let line = "X".repeat(200);
        let folded = fold_line(&line);

        let fold_count = folded.matches("\r\n ").count();
        assert!(fold_count >= 2);
        assert!(folded.split("\r\n").all(|l| l.len() <= 75));
    }

    #[test]
    fn qp_short_line_unchanged() {
        assert_eq!(fold_quoted_printable("NOTE;ENCODING=QUOTED-PRINTABLE:", "a=3Db"), "NOTE;ENCODING=QUOTED-PRINTABLE:a=3Db");
    }

    #[test]
    fn qp_soft_breaks_keep_triplets() {
        let head = "NOTE;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:";
        let encoded = "=C3=A9".repeat(30);
        let folded = fold_quoted_printable(head, &encoded);

        for physical in folded.split("\r\n") {
            assert!(physical.len() <= 75, "{physical}");
        }
        let joined: String = folded
            .split("=\r\n")
            .collect::<Vec<_>>()
            .concat();
        assert_eq!(joined, format!("{head}{encoded}"));
        for segment in folded.split("=\r\n").skip(1) {
            assert!(segment.starts_with('='));
        }
    }
}
