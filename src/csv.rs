//! Minimal delimited-text parser producing header-less rows of strings.
//!
//! Handles quoted fields (including escaped quotes), CRLF line endings, and
//! non-ASCII text such as CJK names. The delimiter is sniffed from the first
//! non-empty line so tab-separated content saved under a `.csv` extension
//! still imports.

/// Parse CSV/TSV bytes into raw rows of cell text.
///
/// Fully empty lines are dropped; everything else is passed through verbatim
/// for the ingestion pipeline to clean and validate.
pub(crate) fn parse_delimited(data: &[u8]) -> Vec<Vec<String>> {
    let text = String::from_utf8_lossy(data);
    let sep = sniff_delimiter(&text);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        rows.push(split_record(line, sep));
    }
    rows
}

/// Pick the field separator: tab wins only when the first non-empty line
/// contains tabs and no commas.
fn sniff_delimiter(text: &str) -> char {
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        if line.contains('\t') && !line.contains(',') {
            return '\t';
        }
        break;
    }
    ','
}

/// Split one record respecting quoted fields.
fn split_record(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let rows = parse_delimited(b"Alice,Bob\nCarol,Dave");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Alice", "Bob"]);
        assert_eq!(rows[1], vec!["Carol", "Dave"]);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse_delimited(b"\"Smith, Jane\",Bob\n\"She said \"\"hi\"\"\",x");
        assert_eq!(rows[0][0], "Smith, Jane");
        assert_eq!(rows[1][0], "She said \"hi\"");
    }

    #[test]
    fn test_tab_sniffing() {
        let rows = parse_delimited(b"Alice\tBob\nCarol\tDave");
        assert_eq!(rows[0], vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_comma_wins_over_tab() {
        // A comma on the first line means tabs are literal text.
        let rows = parse_delimited(b"a,b\tc\nd,e");
        assert_eq!(rows[0], vec!["a", "b\tc"]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let rows = parse_delimited(b"Alice,Bob\r\n\r\nCarol,Dave\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["Carol", "Dave"]);
    }

    #[test]
    fn test_cjk_names() {
        let rows = parse_delimited("张伟,李娜\n王芳,刘强".as_bytes());
        assert_eq!(rows[0], vec!["张伟", "李娜"]);
        assert_eq!(rows[1][1], "刘强");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_delimited(b"").is_empty());
    }
}
