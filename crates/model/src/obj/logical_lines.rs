use std::io::{self, BufRead, Lines};

const CONTINUATION_MARKER: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line the logical line starts on.
    pub number: usize,
    pub content: String,
}

/// Yields the lines of `B`, joining every physical line that ends with `\` with the line
/// following it.
pub struct LogicalLines<B> {
    lines: Lines<B>,
    next_line_number: usize,
}

impl<B> LogicalLines<B>
where
    B: BufRead,
{
    pub fn new(buf_read: B) -> Self {
        Self {
            lines: buf_read.lines(),
            next_line_number: 1,
        }
    }

    fn next_physical_line(&mut self) -> Option<io::Result<String>> {
        let line = self.lines.next()?;
        self.next_line_number += 1;
        Some(line)
    }
}

impl<B> Iterator for LogicalLines<B>
where
    B: BufRead,
{
    type Item = io::Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let number = self.next_line_number;
        let mut content = match self.next_physical_line()? {
            Ok(content) => content,
            Err(err) => return Some(Err(err)),
        };

        let mut continued = content.ends_with(CONTINUATION_MARKER);
        if continued {
            content.pop();
        }
        while continued {
            let mut next_line = match self.next_physical_line() {
                // Marker on the last line, nothing to join
                None => break,
                Some(Ok(next_line)) => next_line,
                Some(Err(err)) => return Some(Err(err)),
            };
            // Only the physical line just read decides whether joining goes on
            continued = next_line.ends_with(CONTINUATION_MARKER);
            if continued {
                next_line.pop();
            }
            content.push_str(&next_line);
        }

        Some(Ok(LogicalLine { number, content }))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn logical_lines(input: &str) -> Vec<(usize, String)> {
        LogicalLines::new(Cursor::new(input))
            .map(|line| line.map(|line| (line.number, line.content)))
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn plain_lines() {
        assert_eq!(
            logical_lines("v 1 2 3\n\nf 1 2 3"),
            [
                (1, "v 1 2 3".to_owned()),
                (2, String::new()),
                (3, "f 1 2 3".to_owned())
            ]
        );
    }

    #[test]
    fn continuation_joins_following_lines() {
        assert_eq!(
            logical_lines("f 1 \\\n2 \\\n3\nv 0 0 0\n"),
            [(1, "f 1 2 3".to_owned()), (4, "v 0 0 0".to_owned())]
        );
    }

    #[test]
    fn continuation_with_crlf() {
        assert_eq!(
            logical_lines("v 1 \\\r\n2 3\r\n"),
            [(1, "v 1 2 3".to_owned())]
        );
    }

    #[test]
    fn marker_on_last_line_is_stripped() {
        assert_eq!(logical_lines("v 1 2 3\\"), [(1, "v 1 2 3".to_owned())]);
    }

    #[test]
    fn marker_followed_by_empty_line_stops_joining() {
        assert_eq!(
            logical_lines("v 1 2 3\\\n\nv 4 5 6"),
            [(1, "v 1 2 3".to_owned()), (3, "v 4 5 6".to_owned())]
        );
    }

    #[test]
    fn escaped_marker_does_not_swallow_lines_after_an_empty_line() {
        assert_eq!(
            logical_lines("v 1 2 3\\\\\n\nv 4 5 6\n"),
            [(1, "v 1 2 3\\".to_owned()), (3, "v 4 5 6".to_owned())]
        );
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut lines = LogicalLines::new(Cursor::new(b"v 1 2 \xff\n".to_vec()));
        assert!(lines.next().unwrap().is_err());
    }
}
