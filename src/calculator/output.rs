//! Annotated output rendering
//!
//! Rejoins a processed document into display text: the original line, a
//! right-aligned `= result`, an optional substituted-expression comment,
//! and any bit-layout block on the following lines. The `=` column sits two
//! spaces past the longest input line.
//!
//! [`format_lines`] additionally tags every output line with a
//! [`LineClass`] so front-ends can style by classification without
//! re-deriving structure from the text.

use crate::calculator::engine::LineResult;
use crate::calculator::value::Num;

/// Classification of one rendered output line, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Comment,
    /// A successfully computed expression line.
    Result,
    /// A failed expression line (message appended as a comment).
    Error,
    /// An `endian:` directive confirmation or rejection.
    Directive,
    /// A line belonging to a bit-layout block.
    BitBlock,
}

/// Render the document with per-line classification tags.
pub fn format_lines(
    lines: &[String],
    results: &[LineResult],
) -> Vec<(String, LineClass)> {
    let max_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = Vec::with_capacity(lines.len());
    for (line, result) in lines.iter().zip(results) {
        match result {
            LineResult::Blank => out.push((String::new(), LineClass::Blank)),
            LineResult::Comment => {
                out.push((line.clone(), LineClass::Comment))
            }
            LineResult::Directive { message } => out.push((
                format!("{}  # {}", line, message),
                LineClass::Directive,
            )),
            LineResult::Failure { message, .. } => out.push((
                format!("{}  # {}", line, message),
                LineClass::Error,
            )),
            LineResult::Success {
                value,
                substituted,
                bit_block,
                bitmap,
                ..
            } => {
                let result_str = render_result(*value, *bitmap);
                let padding =
                    " ".repeat(max_len - line.chars().count() + 2);
                let rendered = match substituted {
                    Some(expr) => format!(
                        "{}{}= {}  # {}",
                        line, padding, result_str, expr
                    ),
                    None => {
                        format!("{}{}= {}", line, padding, result_str)
                    }
                };
                out.push((rendered, LineClass::Result));

                if let Some(block) = bit_block {
                    for block_line in block.lines() {
                        out.push((
                            block_line.to_string(),
                            LineClass::BitBlock,
                        ));
                    }
                }
            }
        }
    }
    out
}

/// Render the document as plain annotated text.
pub fn format_output(lines: &[String], results: &[LineResult]) -> String {
    format_lines(lines, results)
        .into_iter()
        .map(|(text, _)| text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result column text. A `bitmap`-flagged non-negative whole number shows
/// its hex and binary forms alongside the decimal.
fn render_result(value: Num, bitmap: bool) -> String {
    match value {
        Num::Int(n) if bitmap && n >= 0 => {
            format!("{} (0x{:X}, 0b{:b})", n, n, n)
        }
        _ => value.to_display_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::engine::Calculator;
    use crate::calculator::messages::Language;

    fn render(text: &str) -> String {
        let mut calc = Calculator::new(Language::En);
        calc.process_text(text);
        calc.format_output()
    }

    #[test]
    fn test_equals_alignment() {
        let out = render("a = 100\nlonger_name = 200");
        let lines: Vec<&str> = out.lines().collect();
        // both `=` result markers sit two columns past the longest line
        assert_eq!(lines[0], "a = 100            = 100");
        assert_eq!(lines[1], "longer_name = 200  = 200");
    }

    #[test]
    fn test_substituted_expression_comment() {
        let out = render("a = 100\nb = 200\nsum = a + b");
        let last = out.lines().last().unwrap();
        assert!(last.ends_with("= 300  # 100+200"));
    }

    #[test]
    fn test_error_appended_as_comment() {
        let out = render("x = 5 / 0");
        assert_eq!(out, "x = 5 / 0  # Error: division by zero");
    }

    #[test]
    fn test_directive_message() {
        let out = render("endian: big");
        assert_eq!(out, "endian: big  # Set to Big Endian");
    }

    #[test]
    fn test_bitmap_result_shows_all_bases() {
        let out = render("bitmap x = 255");
        assert_eq!(out, "bitmap x = 255  = 255 (0xFF, 0b11111111)");
    }

    #[test]
    fn test_bit_block_follows_its_line() {
        let out = render("endian: little\nbitmap x = 0xFF");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("= 255 (0xFF, 0b11111111)"));
        assert_eq!(lines[2], "  Hex: 0xFF");
        assert_eq!(lines[3], "  Binary: 0b11111111");
    }

    #[test]
    fn test_comments_and_blanks_pass_through() {
        let out = render("# heading\n\n1 + 2");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "# heading");
        assert_eq!(lines[1], "");
        // the comment line is the widest, so it sets the `=` column
        assert_eq!(lines[2], "1 + 2      = 3");
    }

    #[test]
    fn test_float_rendering() {
        let out = render("1/4");
        assert_eq!(out, "1/4  = 0.25");
        let out = render("discount = 15%");
        assert_eq!(out, "discount = 15%  = 0.15");
    }

    #[test]
    fn test_line_classes() {
        let mut calc = Calculator::new(Language::En);
        calc.process_text("# c\n\nendian: little\nbitmap x = 0xFF\ny = q");
        let classes: Vec<LineClass> =
            format_lines(calc.lines(), calc.results())
                .into_iter()
                .map(|(_, class)| class)
                .collect();
        assert_eq!(classes[0], LineClass::Comment);
        assert_eq!(classes[1], LineClass::Blank);
        assert_eq!(classes[2], LineClass::Directive);
        assert_eq!(classes[3], LineClass::Result);
        assert_eq!(classes[4], LineClass::BitBlock);
        assert_eq!(*classes.last().unwrap(), LineClass::Error);
    }
}
