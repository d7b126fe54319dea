//! Line classification
//!
//! Splits one raw document line into its structural form: blank, comment,
//! `endian:` directive, or an expression with an optional assignment label
//! and an optional `bitmap` flag. Trailing `#` comments are stripped here,
//! so a literal `#` can never appear inside an expression.

use crate::display::bits::EndianMode;
use crate::parser::lexer::is_identifier;

/// Outcome of classifying one trimmed line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Blank,
    Comment,
    Directive(DirectiveKind),
    Expression {
        label: Option<String>,
        expr: String,
        bitmap: bool,
    },
}

/// A recognized or rejected `endian:` directive.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveKind {
    Endian(EndianMode),
    /// The lowercased token that matched no synonym set.
    Unknown(String),
}

/// Case-insensitive ASCII prefix check, safe on multi-byte text.
fn has_ci_prefix(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Classify one line. Directives are matched before trailing-comment
/// stripping, so `endian: little # x` carries an unknown token.
pub fn classify_line(raw: &str) -> ParsedLine {
    let line = raw.trim();

    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if line.starts_with('#') {
        return ParsedLine::Comment;
    }

    if has_ci_prefix(line, "endian:") {
        let token = line["endian:".len()..].trim().to_lowercase();
        let kind = match token.as_str() {
            "little" | "small" | "小端" | "小字节序" => {
                DirectiveKind::Endian(EndianMode::Little)
            }
            "big" | "large" | "大端" | "大字节序" => {
                DirectiveKind::Endian(EndianMode::Big)
            }
            "none" | "off" | "关闭" => {
                DirectiveKind::Endian(EndianMode::Disabled)
            }
            _ => DirectiveKind::Unknown(token),
        };
        return ParsedLine::Directive(kind);
    }

    // strip trailing comment
    let code = match line.find('#') {
        Some(i) => line[..i].trim(),
        None => line,
    };

    // `bitmap` keyword must be followed by whitespace (or end the line)
    let (bitmap, code) = if has_ci_prefix(code, "bitmap")
        && code[6..].chars().next().map_or(true, char::is_whitespace)
    {
        (true, code[6..].trim())
    } else {
        (false, code)
    };

    // assignment: split on the first `=`; the left side is a label only if
    // it matches the identifier grammar, otherwise the `=` belongs to the
    // (malformed) expression and the evaluator rejects it
    if let Some((left, right)) = code.split_once('=') {
        let left = left.trim();
        if is_identifier(left) {
            return ParsedLine::Expression {
                label: Some(left.to_string()),
                expr: right.trim().to_string(),
                bitmap,
            };
        }
    }

    ParsedLine::Expression {
        label: None,
        expr: code.to_string(),
        bitmap,
    }
}
