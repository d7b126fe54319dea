//! Lexer (tokenizer) for expression text
//!
//! Converts one expression string into a flat [`Token`] stream. Each literal
//! token keeps its original lexeme so the substituted expression can be
//! rendered back exactly as written (`0xFF` stays `0xFF`, `15%` stays `15%`).
//!
//! Characters outside the allowed grammar — digits, `.`, identifiers,
//! `+ - * / ( )` and the bitwise operators `<< >> & | ^ ~` — are rejected
//! with [`EvalError::IllegalCharacter`]. A lone `<` or `>` is rejected the
//! same way: comparisons are not part of the expression language.

use crate::calculator::errors::EvalError;
use crate::calculator::value::Num;

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal: decimal, hex/binary (`hex_bin` set), or percentage.
    Number {
        value: Num,
        lexeme: String,
        hex_bin: bool,
    },

    /// An identifier (variable reference).
    Ident(String),

    // Arithmetic
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /

    // Bitwise
    Shl,   // <<
    Shr,   // >>
    Amp,   // &
    Pipe,  // |
    Caret, // ^
    Tilde, // ~

    // Punctuation
    LParen, // (
    RParen, // )
}

impl Token {
    /// The textual form of this token, used to render substituted expressions.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number { lexeme, .. } => lexeme,
            Token::Ident(name) => name,
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::Amp => "&",
            Token::Pipe => "|",
            Token::Caret => "^",
            Token::Tilde => "~",
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }

    /// Whether this token is one of the six bitwise operators.
    pub fn is_bitwise(&self) -> bool {
        matches!(
            self,
            Token::Shl
                | Token::Shr
                | Token::Amp
                | Token::Pipe
                | Token::Caret
                | Token::Tilde
        )
    }

    /// Whether this token is an explicit hex or binary literal.
    pub fn is_hex_bin(&self) -> bool {
        matches!(self, Token::Number { hex_bin: true, .. })
    }
}

/// First character of an identifier: ASCII letter, underscore, or a CJK
/// ideograph (labels like `房租` are valid variable names).
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || matches!(c, '\u{4e00}'..='\u{9fa5}')
}

/// Subsequent identifier character: adds ASCII digits.
pub fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Check whether a whole string is a valid identifier (assignment label).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_char),
        _ => false,
    }
}

/// Lenient identifier scan over raw expression text, deduplicated in
/// first-appearance order.
///
/// Used to report undefined variables on lines that also fail to tokenize.
/// Anything starting with a digit is skipped as a literal run (`0xFF`,
/// `2a`), so its letters are never mistaken for a name.
pub fn scan_identifiers(expr: &str) -> Vec<String> {
    let chars: Vec<char> = expr.chars().collect();
    let mut names: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            while i < chars.len()
                && (is_ident_char(chars[i]) || chars[i] == '.')
            {
                i += 1;
            }
        } else if is_ident_start(chars[i]) {
            let mut name = String::new();
            while i < chars.len() && is_ident_char(chars[i]) {
                name.push(chars[i]);
                i += 1;
            }
            if !names.iter().any(|n| *n == name) {
                names.push(name);
            }
        } else {
            i += 1;
        }
    }

    names
}

/// Lexer for one expression string.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }
            tokens.push(self.next_token(ch)?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self, ch: char) -> Result<Token, EvalError> {
        if ch.is_ascii_digit() || ch == '.' {
            return self.number_literal();
        }

        if is_ident_start(ch) {
            return Ok(self.identifier());
        }

        self.advance();
        match ch {
            '+' => Ok(Token::Plus),
            '-' => Ok(Token::Minus),
            '*' => Ok(Token::Star),
            '/' => Ok(Token::Slash),
            '&' => Ok(Token::Amp),
            '|' => Ok(Token::Pipe),
            '^' => Ok(Token::Caret),
            '~' => Ok(Token::Tilde),
            '(' => Ok(Token::LParen),
            ')' => Ok(Token::RParen),
            '<' => {
                if self.peek() == Some('<') {
                    self.advance();
                    Ok(Token::Shl)
                } else {
                    // comparison operators are not part of the grammar
                    Err(EvalError::IllegalCharacter)
                }
            }
            '>' => {
                if self.peek() == Some('>') {
                    self.advance();
                    Ok(Token::Shr)
                } else {
                    Err(EvalError::IllegalCharacter)
                }
            }
            _ => Err(EvalError::IllegalCharacter),
        }
    }

    /// Parse a numeric literal: `0x..`, `0b..`, decimal, or percentage.
    fn number_literal(&mut self) -> Result<Token, EvalError> {
        if self.peek() == Some('0') {
            match self.peek_ahead(1) {
                Some('x') | Some('X') => return self.radix_literal(16),
                Some('b') | Some('B') => return self.radix_literal(2),
                _ => {}
            }
        }

        let mut lexeme = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        // a bare "." is not a number
        if lexeme == "." || lexeme.is_empty() {
            return Err(EvalError::SyntaxError);
        }

        // percentage literal: N% / N.N%
        if self.peek() == Some('%') {
            self.advance();
            let fraction = lexeme
                .parse::<f64>()
                .map_err(|_| EvalError::SyntaxError)?
                / 100.0;
            lexeme.push('%');
            self.check_literal_end()?;
            return Ok(Token::Number {
                value: Num::from_f64(fraction),
                lexeme,
                hex_bin: false,
            });
        }

        let value = if seen_dot {
            Num::from_f64(
                lexeme.parse::<f64>().map_err(|_| EvalError::SyntaxError)?,
            )
        } else {
            Num::Int(lexeme.parse::<i64>().map_err(|_| {
                EvalError::Computation(format!(
                    "integer literal out of range: {}",
                    lexeme
                ))
            })?)
        };

        self.check_literal_end()?;
        Ok(Token::Number {
            value,
            lexeme,
            hex_bin: false,
        })
    }

    /// Parse `0x`/`0X` hex or `0b`/`0B` binary literals.
    fn radix_literal(&mut self, radix: u32) -> Result<Token, EvalError> {
        let mut lexeme = String::new();
        // "0x" / "0b" prefix, two chars
        lexeme.push(self.advance().ok_or(EvalError::IllegalCharacter)?);
        lexeme.push(self.advance().ok_or(EvalError::IllegalCharacter)?);

        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_digit(radix) {
                digits.push(c);
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if digits.is_empty() {
            // "0x" with no digits leaves a stray letter in the expression
            return Err(EvalError::IllegalCharacter);
        }

        let value = i64::from_str_radix(&digits, radix).map_err(|_| {
            EvalError::Computation(format!(
                "integer literal out of range: {}",
                lexeme
            ))
        })?;

        self.check_literal_end()?;
        Ok(Token::Number {
            value: Num::Int(value),
            lexeme,
            hex_bin: true,
        })
    }

    /// Reject a literal running straight into an identifier or more digits
    /// (`2a`, `0b12`): the juxtaposition can never form a valid expression.
    fn check_literal_end(&self) -> Result<(), EvalError> {
        match self.peek() {
            Some(c) if is_ident_char(c) => Err(EvalError::IllegalCharacter),
            Some('.') => Err(EvalError::SyntaxError),
            _ => Ok(()),
        }
    }

    fn identifier(&mut self) -> Token {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_ident_char(c) {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Token::Ident(name)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}
