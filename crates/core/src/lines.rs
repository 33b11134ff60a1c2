//! Raw-line source: splits parameter text into significant lines.
//!
//! Comments start with `>>` and run to the end of the line. Lines that are
//! empty after comment removal are dropped; every retained line keeps its
//! 1-based physical line number for error reporting.

pub const COMMENT_MARKER: &str = ">>";

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Line text with the comment and surrounding whitespace removed.
    pub text: String,
    pub number: u32,
}

pub fn split_lines(src: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for (i, raw) in src.lines().enumerate() {
        let without_comment = match raw.find(COMMENT_MARKER) {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let text = without_comment.trim();
        if text.is_empty() {
            continue;
        }
        lines.push(Line {
            text: text.to_owned(),
            number: (i + 1) as u32,
        });
    }
    lines
}

/// Line number reported for errors at end of input: one past the last
/// physical line of the source.
pub fn end_line(src: &str) -> u32 {
    src.lines().count() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_blank_lines() {
        let src = ">> header comment\n\nTimestep 10 >> years\n   \n  FuelTypes\n";
        let lines = split_lines(src);
        assert_eq!(
            lines,
            vec![
                Line {
                    text: "Timestep 10".to_string(),
                    number: 3,
                },
                Line {
                    text: "FuelTypes".to_string(),
                    number: 5,
                },
            ]
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let lines = split_lines("a 1\r\nb 2\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "b 2");
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn end_line_is_one_past_last() {
        assert_eq!(end_line("a\nb\n"), 3);
        assert_eq!(end_line(""), 1);
    }
}
