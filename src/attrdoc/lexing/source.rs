//! Line sources
//!
//! The parser consumes lines without their terminators. Both LF and CR-LF
//! endings are accepted. A line that is not followed by a terminator is the
//! last one, so `"a\n"` yields `"a"` and then an empty final line, the same
//! way a reader hitting end-of-file right after a newline does.

use std::io::{self, BufRead};

fn strip_terminator(line: &str) -> Option<&str> {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Split a source string into lines
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut pieces = source.split('\n').peekable();
    std::iter::from_fn(move || {
        let piece = pieces.next()?;
        if pieces.peek().is_some() {
            Some(piece.strip_suffix('\r').unwrap_or(piece))
        } else {
            Some(piece)
        }
    })
}

/// Lines read from a buffered reader
///
/// Yields `io::Result<String>`; an error (including invalid UTF-8) ends the
/// sequence after it is reported.
pub struct ReaderLines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        ReaderLines {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buffer = String::new();
        match self.reader.read_line(&mut buffer) {
            Ok(_) => match strip_terminator(&buffer) {
                Some(line) => Some(Ok(line.to_string())),
                None => {
                    self.done = true;
                    Some(Ok(buffer))
                }
            },
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(source: &str) -> Vec<String> {
        ReaderLines::new(Cursor::new(source.as_bytes()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_split_lines_lf() {
        let lines: Vec<_> = split_lines("a\nb\n").collect();
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_lines_crlf() {
        let lines: Vec<_> = split_lines("a\r\nb\r\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_keeps_unterminated_cr() {
        let lines: Vec<_> = split_lines("a\r").collect();
        assert_eq!(lines, vec!["a\r"]);
    }

    #[test]
    fn test_split_lines_empty_source() {
        let lines: Vec<_> = split_lines("").collect();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_reader_lines_match_split_lines() {
        for source in ["a\nb\n", "a\r\nb", "", "\n\n", "x\r\n\r\ny"] {
            let from_str: Vec<String> = split_lines(source).map(str::to_string).collect();
            assert_eq!(read_all(source), from_str, "source: {source:?}");
        }
    }

    #[test]
    fn test_reader_lines_invalid_utf8() {
        let bytes: &[u8] = &[b'a', b'\n', 0xff, 0xfe, b'\n'];
        let mut lines = ReaderLines::new(Cursor::new(bytes));
        assert_eq!(lines.next().unwrap().unwrap(), "a");
        assert!(lines.next().unwrap().is_err());
        assert!(lines.next().is_none());
    }
}
