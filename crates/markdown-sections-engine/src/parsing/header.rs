//! Splits an optional delimiter-bounded metadata header from the body.
//!
//! A header exists only when the very first line is the delimiter and a later
//! line is the delimiter again. Anything else means "no header" and the whole
//! input is body. This never fails.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Result of splitting a document into header and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderSplit {
    /// Raw text between the delimiters, `None` when there is no header.
    pub raw: Option<String>,
    /// `key: value` pairs parsed from the header. The first occurrence of a key wins.
    pub fields: BTreeMap<String, String>,
    /// Body with leading blank lines and trailing whitespace removed.
    pub body: String,
}

fn key_value_regex() -> &'static Regex {
    static KV: OnceLock<Regex> = OnceLock::new();
    KV.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z0-9_][A-Za-z0-9_.-]*)\s*:(?:\s+(.*?))?\s*$")
            .expect("header regex is valid")
    })
}

pub fn split_header(text: &str, delimiter: &str) -> HeaderSplit {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return HeaderSplit::default();
    };
    if !is_delimiter(first, delimiter) {
        return no_header(text);
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line, delimiter) {
            let raw = text[header_start..offset].trim_end_matches(['\r', '\n']);
            let body = &text[offset + line.len()..];
            log::debug!("header found ({} bytes)", raw.len());
            return HeaderSplit {
                raw: Some(raw.to_string()),
                fields: parse_fields(raw),
                body: trim_blank_lines(body).to_string(),
            };
        }
        offset += line.len();
    }

    log::debug!("header opener without closing delimiter, treating input as body");
    no_header(text)
}

fn no_header(text: &str) -> HeaderSplit {
    HeaderSplit {
        raw: None,
        fields: BTreeMap::new(),
        body: trim_blank_lines(text).to_string(),
    }
}

fn is_delimiter(line: &str, delimiter: &str) -> bool {
    line.trim_end() == delimiter
}

/// Parses `key: value` lines; other lines are skipped.
pub fn parse_fields(raw: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for line in raw.lines() {
        if let Some(caps) = key_value_regex().captures(line) {
            let value = caps.get(2).map_or("", |m| m.as_str());
            fields
                .entry(caps[1].to_string())
                .or_insert_with(|| value.to_string());
        }
    }
    fields
}

/// Drops leading whitespace-only lines and trailing whitespace.
pub fn trim_blank_lines(s: &str) -> &str {
    let mut start = 0;
    for line in s.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    s[start..].trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_round_trip() {
        let split = split_header("---\ntitle: X\n---\nBody\n", "---");
        assert_eq!(split.raw.as_deref(), Some("title: X"));
        assert_eq!(split.fields.get("title").map(String::as_str), Some("X"));
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn missing_closing_delimiter_means_no_header() {
        let split = split_header("---\ntitle: X\nBody", "---");
        assert_eq!(split.raw, None);
        assert!(split.fields.is_empty());
        assert_eq!(split.body, "---\ntitle: X\nBody");
    }

    #[test]
    fn delimiter_must_be_first_line() {
        let split = split_header("\n---\ntitle: X\n---\nBody", "---");
        assert_eq!(split.raw, None);
    }

    #[test]
    fn non_key_value_lines_stay_in_raw_only() {
        let split = split_header("---\ntitle: X\n  - nested\njunk\n---\n\n\nBody\n\n", "---");
        assert_eq!(split.raw.as_deref(), Some("title: X\n  - nested\njunk"));
        assert_eq!(split.fields.len(), 1);
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn first_key_wins() {
        let fields = parse_fields("a: 1\na: 2\nb:\nurl: http://x");
        assert_eq!(fields["a"], "1");
        assert_eq!(fields["b"], "");
        assert_eq!(fields["url"], "http://x");
    }

    #[test]
    fn crlf_header() {
        let split = split_header("---\r\ntitle: X\r\n---\r\nBody", "---");
        assert_eq!(split.fields["title"], "X");
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn custom_delimiter() {
        let split = split_header("+++\nk: v\n+++\nBody", "+++");
        assert_eq!(split.fields["k"], "v");
    }

    #[test]
    fn empty_input() {
        assert_eq!(split_header("", "---"), HeaderSplit::default());
    }
}
