//! Line classification and section isolation.
//!
//! The relationships scan runs in two passes: first the section body is
//! cut out of the response, then each line of it is classified. Only
//! candidate (bullet) lines are handed to the triple parser.

/// Classification of a single response line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A markdown heading (`#`, `##`, ...). Terminates a section.
    Heading,
    /// A bullet line eligible for triple parsing.
    Candidate {
        /// The whole trimmed line, marker included.
        line: &'a str,
        /// The trimmed text after the bullet marker.
        body: &'a str,
    },
    /// Anything else. Skipped.
    Other,
}

const BULLET_MARKERS: [&str; 2] = ["- ", "* "];

/// Classifies one line of response text.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with('#') {
        return LineKind::Heading;
    }

    for marker in BULLET_MARKERS {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return LineKind::Candidate {
                line: trimmed,
                body: rest.trim(),
            };
        }
    }

    LineKind::Other
}

/// Returns the text between the first occurrence of `header` and the next
/// heading line (or end of text).
///
/// The remainder of the header's own line belongs to the section; the
/// heading check starts on the line after it.
pub fn isolate_section<'a>(text: &'a str, header: &str) -> Option<&'a str> {
    let start = text.find(header)? + header.len();
    let body = &text[start..];

    let mut offset = 0;
    for (index, line) in body.split_inclusive('\n').enumerate() {
        if index > 0 && classify_line(line) == LineKind::Heading {
            return Some(&body[..offset]);
        }
        offset += line.len();
    }

    Some(body)
}

/// Iterates the candidate lines of a section, skipping everything else.
pub fn candidate_lines(section: &str) -> impl Iterator<Item = (&str, &str)> {
    section.lines().filter_map(|line| match classify_line(line) {
        LineKind::Candidate { line, body } => Some((line, body)),
        _ => None,
    })
}
