//! Corpus line parser.
//!
//! A corpus line carries three double-quoted fields separated by commas:
//!
//! ```text
//! "Toto, I've a feeling we're not in Kansas anymore.", "The Wizard of Oz", "1939"
//! ```
//!
//! Lines missing any field are skipped. An unparseable year is reported
//! and falls back to 0 rather than discarding the line.

use log::warn;

/// One parsed corpus line: the quote text, the title of the work it is
/// from, and that work's year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub quote: String,
    pub source: String,
    pub year: i32,
}

/// Parses a corpus line, returning `None` for malformed lines.
/// `line_num` is 1-based and only used for warnings.
pub fn parse_line(line: &str, line_num: usize) -> Option<QuoteLine> {
    let (quote, rest) = next_quoted(line)?;
    let rest = skip_comma(rest)?;
    let (source, rest) = next_quoted(rest)?;
    let rest = skip_comma(rest)?;
    let (year_str, _) = next_quoted(rest)?;

    let year = match year_str.trim().parse::<i32>() {
        Ok(year) => year,
        Err(_) => {
            warn!("invalid year format on line {line_num}: '{year_str}', using 0");
            0
        }
    };

    Some(QuoteLine {
        quote: quote.to_string(),
        source: source.to_string(),
        year,
    })
}

/// Extracts the next `"..."` field, returning it and the remainder after
/// the closing quote.
fn next_quoted(s: &str) -> Option<(&str, &str)> {
    let start = s.find('"')?;
    let rest = &s[start + 1..];
    let end = rest.find('"')?;
    Some((&rest[..end], &rest[end + 1..]))
}

/// Requires a field-separating comma before the next quoted field.
fn skip_comma(s: &str) -> Option<&str> {
    let pos = s.find(',')?;
    Some(&s[pos + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let line = r#""I'll be back.", "The Terminator", "1984""#;
        let parsed = parse_line(line, 1).unwrap();
        assert_eq!(parsed.quote, "I'll be back.");
        assert_eq!(parsed.source, "The Terminator");
        assert_eq!(parsed.year, 1984);
    }

    #[test]
    fn tolerates_surrounding_noise() {
        let line = r#"  "Here's Johnny!" , "The Shining" , "1980"  "#;
        let parsed = parse_line(line, 1).unwrap();
        assert_eq!(parsed.source, "The Shining");
        assert_eq!(parsed.year, 1980);
    }

    #[test]
    fn rejects_lines_missing_fields() {
        assert!(parse_line("", 1).is_none());
        assert!(parse_line("no quotes at all", 1).is_none());
        assert!(parse_line(r#""only a quote""#, 1).is_none());
        assert!(parse_line(r#""quote", "source""#, 1).is_none());
        // Fields present but no separating comma.
        assert!(parse_line(r#""quote" "source" "1999""#, 1).is_none());
    }

    #[test]
    fn bad_year_falls_back_to_zero() {
        let line = r#""some quote", "some movie", "MCMXCIX""#;
        let parsed = parse_line(line, 7).unwrap();
        assert_eq!(parsed.year, 0);
    }

    #[test]
    fn commas_inside_quote_text_are_preserved() {
        let line = r#""Toto, I've a feeling we're not in Kansas anymore.", "The Wizard of Oz", "1939""#;
        let parsed = parse_line(line, 1).unwrap();
        assert_eq!(
            parsed.quote,
            "Toto, I've a feeling we're not in Kansas anymore."
        );
        assert_eq!(parsed.year, 1939);
    }
}
