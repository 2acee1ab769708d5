//! Inline marker scanning
//!
//! Body text may declare child nodes mid-line: `text \type= int` ends the
//! current body at `text` and opens a `type` node whose body starts at `int`.
//! A marker is the escape character, a tag, and `=`, where the escape is not
//! itself preceded by another escape. Whitespace after the `=` belongs to the
//! marker.
//!
//! Doubling the escape (`\\type=`) writes the marker literally; the doubled
//! form is reduced to a single escape by [`unescape_markers`].

use super::tokens::{tokenize, Token};
use std::borrow::Cow;
use std::ops::Range;

/// A split point inside body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMarker<'a> {
    /// Byte offset of the escape character
    pub start: usize,
    pub tag: &'a str,
    /// Byte offset just past the `=` and any whitespace after it
    pub end: usize,
}

/// An escape + tag sequence that lacks the closing `=`, kept as plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedMarker<'a> {
    pub start: usize,
    pub tag: &'a str,
}

/// Result of scanning a piece of body text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerScan<'a> {
    pub markers: Vec<InlineMarker<'a>>,
    pub unterminated: Vec<UnterminatedMarker<'a>>,
}

/// Find all inline markers in `text`, left to right, without overlap
pub fn scan_markers(text: &str) -> MarkerScan<'_> {
    let tokens = tokenize(text);
    let mut scan = MarkerScan::default();
    let mut i = 0;

    while i < tokens.len() {
        let escaped = i > 0 && tokens[i - 1].0 == Token::Escape;
        if tokens[i].0 != Token::Escape || escaped {
            i += 1;
            continue;
        }
        let tag_span = match tokens.get(i + 1) {
            Some((Token::Word, span)) => span.clone(),
            _ => {
                i += 1;
                continue;
            }
        };
        let start = tokens[i].1.start;
        let tag = &text[tag_span];

        match tokens.get(i + 2) {
            Some((Token::Equals, equals)) => {
                let mut end = equals.end;
                let mut consumed = 3;
                if let Some((Token::Whitespace, ws)) = tokens.get(i + 3) {
                    end = ws.end;
                    consumed = 4;
                }
                scan.markers.push(InlineMarker { start, tag, end });
                i += consumed;
            }
            _ => {
                scan.unterminated.push(UnterminatedMarker { start, tag });
                i += 2;
            }
        }
    }

    scan
}

/// Reduce every doubled-escape marker (`\\tag=`) to its literal single-escape
/// form (`\tag=`). Text without such sequences is returned unchanged.
pub fn unescape_markers(text: &str) -> Cow<'_, str> {
    let tokens = tokenize(text);
    let dropped: Vec<Range<usize>> = tokens
        .windows(4)
        .filter_map(|window| match window {
            [(Token::Escape, first), (Token::Escape, _), (Token::Word, _), (Token::Equals, _)] => {
                Some(first.clone())
            }
            _ => None,
        })
        .collect();

    if dropped.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    for span in dropped {
        result.push_str(&text[pos..span.start]);
        pos = span.end;
    }
    result.push_str(&text[pos..]);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marker() {
        let text = "text \\type= int more";
        let scan = scan_markers(text);
        assert_eq!(scan.markers.len(), 1);
        let marker = &scan.markers[0];
        assert_eq!(marker.tag, "type");
        assert_eq!(&text[..marker.start], "text ");
        assert_eq!(&text[marker.end..], "int more");
        assert!(scan.unterminated.is_empty());
    }

    #[test]
    fn test_marker_at_start_of_text() {
        let scan = scan_markers("\\return= void");
        assert_eq!(scan.markers.len(), 1);
        assert_eq!(scan.markers[0].start, 0);
    }

    #[test]
    fn test_adjacent_markers() {
        let text = "a \\x=\\y= b";
        let scan = scan_markers(text);
        let tags: Vec<_> = scan.markers.iter().map(|m| m.tag).collect();
        assert_eq!(tags, vec!["x", "y"]);
        assert_eq!(&text[scan.markers[1].end..], "b");
    }

    #[test]
    fn test_escaped_marker_is_not_a_split() {
        let scan = scan_markers("a \\\\type= b");
        assert!(scan.markers.is_empty());
        assert!(scan.unterminated.is_empty());
    }

    #[test]
    fn test_unterminated_marker() {
        let text = "see \\ref here";
        let scan = scan_markers(text);
        assert!(scan.markers.is_empty());
        assert_eq!(
            scan.unterminated,
            vec![UnterminatedMarker {
                start: 4,
                tag: "ref"
            }]
        );
    }

    #[test]
    fn test_unescape_doubled_marker() {
        assert_eq!(unescape_markers("a \\\\type= b"), "a \\type= b");
        assert_eq!(unescape_markers("\\\\a=\\\\b="), "\\a=\\b=");
    }

    #[test]
    fn test_unescape_leaves_other_text_alone() {
        assert!(matches!(unescape_markers("a \\\\type b"), Cow::Borrowed(_)));
        assert!(matches!(unescape_markers("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape_triple_escape() {
        // Only the escape directly before the literal marker is removed
        assert_eq!(unescape_markers("\\\\\\type="), "\\\\type=");
    }
}
