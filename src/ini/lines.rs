//! Line splitting and classification.

use super::error::{ParseError, SyntaxErrorKind};

/// One meaningful line of an INI file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Section(&'a str),
    Assignment { key: &'a str, value: &'a str },
}

/// Splits content into `(line number, line)` pairs, numbered from 1.
///
/// Both `\r\n` and `\n` end a line. A leading byte-order mark is dropped.
pub fn split_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content.lines().enumerate().map(|(index, line)| (index + 1, line))
}

/// Classifies a raw line. Blank lines and comments yield `Ok(None)`.
pub fn classify(line_no: usize, raw: &str) -> Result<Option<Line<'_>>, ParseError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
        return Ok(None);
    }

    let syntax = |kind| ParseError::Syntax {
        line: line_no,
        kind,
    };

    if let Some(rest) = line.strip_prefix('[') {
        let name = rest
            .strip_suffix(']')
            .ok_or_else(|| syntax(SyntaxErrorKind::UnterminatedSection))?
            .trim();
        if name.is_empty() {
            return Err(syntax(SyntaxErrorKind::EmptySectionName));
        }
        return Ok(Some(Line::Section(name)));
    }

    match line.split_once('=') {
        None => Err(syntax(SyntaxErrorKind::MissingEquals)),
        Some(("", _)) => Err(syntax(SyntaxErrorKind::MissingKey)),
        Some((key, value)) => Ok(Some(Line::Assignment {
            key: key.trim(),
            value: value.trim(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_kind(raw: &str) -> SyntaxErrorKind {
        match classify(1, raw) {
            Err(ParseError::Syntax { kind, .. }) => kind,
            other => panic!("expected syntax error for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_split_crlf_and_lf() {
        let lines: Vec<_> = split_lines("a\r\nb\nc").collect();
        assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_split_drops_bom() {
        let lines: Vec<_> = split_lines("\u{feff}[mysql]\r\n").collect();
        assert_eq!(lines, vec![(1, "[mysql]")]);
    }

    #[test]
    fn test_blank_and_comments_skipped() {
        for raw in ["", "   ", "\t", "; note", "  # note", "#[mysql]"] {
            assert_eq!(classify(1, raw).unwrap(), None, "{raw:?}");
        }
    }

    #[test]
    fn test_section_name_trimmed() {
        assert_eq!(classify(1, "  [ my sql ]  ").unwrap(), Some(Line::Section("my sql")));
    }

    #[test]
    fn test_assignment_splits_on_first_equals() {
        assert_eq!(
            classify(1, " dsn = user=root ; x ").unwrap(),
            Some(Line::Assignment {
                key: "dsn",
                value: "user=root ; x"
            })
        );
        assert_eq!(
            classify(1, "empty =").unwrap(),
            Some(Line::Assignment {
                key: "empty",
                value: ""
            })
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(syntax_kind("[section"), SyntaxErrorKind::UnterminatedSection);
        assert_eq!(syntax_kind("["), SyntaxErrorKind::UnterminatedSection);
        assert_eq!(syntax_kind("[]"), SyntaxErrorKind::EmptySectionName);
        assert_eq!(syntax_kind("[   ]"), SyntaxErrorKind::EmptySectionName);
        assert_eq!(syntax_kind("=value"), SyntaxErrorKind::MissingKey);
        assert_eq!(syntax_kind("novalue"), SyntaxErrorKind::MissingEquals);
    }

    #[test]
    fn test_error_carries_line_number() {
        let err = classify(7, "novalue").unwrap_err();
        assert_eq!(err.line(), 7);
    }
}
