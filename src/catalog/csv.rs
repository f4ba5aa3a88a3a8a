use std::mem::take;

/// Minimal CSV parser, quote and CRLF tolerant. The roster dataset wraps
/// salary values like "$33,616,770" in quotes, so naive line splitting
/// is not enough.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush the trailing field/row even if the text lacked a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rows() {
        let rows = parse_rows("Name,Team\nJoel Embiid21,PHI\n");
        assert_eq!(
            rows,
            vec![
                vec!["Name".to_string(), "Team".to_string()],
                vec!["Joel Embiid21".to_string(), "PHI".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_quoted_field_with_commas() {
        let rows = parse_rows("Name,Salary\nJoel Embiid21,\"$51,415,938\"\n");
        assert_eq!(rows[1][1], "$51,415,938");
    }

    #[test]
    fn test_parse_escaped_quote_and_crlf() {
        let rows = parse_rows("a,\"say \"\"hi\"\"\"\r\nb,c\r\n");
        assert_eq!(rows[0][1], "say \"hi\"");
        assert_eq!(rows[1], vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_handles_missing_final_newline() {
        let rows = parse_rows("a,b\n\nc,d");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c".to_string(), "d".to_string()]);
    }
}
