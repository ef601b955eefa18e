use crate::parsing::{header::trim_blank_lines, rope::Span, scan::Line};

/// Joins scope lines into one markdown fragment.
///
/// Marker lines become empty lines and a jump in line numbers (content
/// interrupted by another scope) becomes a paragraph break, so neither can
/// glue two separate paragraphs together.
pub fn join_lines(lines: &[Line], indices: &[usize]) -> String {
    let mut out = String::new();
    let mut prev: Option<usize> = None;
    for &i in indices {
        if let Some(p) = prev {
            out.push('\n');
            if i != p + 1 {
                out.push('\n');
            }
        }
        let line = &lines[i];
        if !line.is_marker() {
            out.push_str(&line.text);
        }
        prev = Some(i);
    }
    trim_blank_lines(&out).to_string()
}

/// Span from the first to the last non-blank content line.
pub fn content_span(lines: &[Line], indices: &[usize]) -> Option<Span> {
    indices
        .iter()
        .map(|&i| &lines[i])
        .filter(|l| !l.is_blank() && !l.is_marker())
        .map(|l| l.span)
        .reduce(Span::cover)
}

/// True when the lines hold anything besides blank lines and markers.
pub fn has_content(lines: &[Line], indices: &[usize]) -> bool {
    content_span(lines, indices).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::scan::scan;
    use xi_rope::Rope;

    #[test]
    fn markers_become_paragraph_breaks() {
        let lines = scan(&Rope::from("One\n<!-- f -->\nTwo"));
        assert_eq!(join_lines(&lines, &[0, 1, 2]), "One\n\nTwo");
    }

    #[test]
    fn gaps_become_paragraph_breaks() {
        let lines = scan(&Rope::from("One\nskipped\nTwo"));
        assert_eq!(join_lines(&lines, &[0, 2]), "One\n\nTwo");
    }

    #[test]
    fn marker_only_lines_have_no_content() {
        let lines = scan(&Rope::from("<!-- a -->\n\n<!-- b -->"));
        assert!(!has_content(&lines, &[0, 1, 2]));
        assert_eq!(join_lines(&lines, &[0, 1, 2]), "");
    }

    #[test]
    fn span_covers_first_to_last_content_line() {
        let lines = scan(&Rope::from("<!-- a -->\nab\n\ncd"));
        assert_eq!(content_span(&lines, &[0, 1, 2, 3]), Some(Span::new(11, 17)));
    }
}
