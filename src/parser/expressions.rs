//! Expression parsing
//!
//! Recursive descent over the token stream with C-family precedence:
//!
//! ```text
//! unary - ~  >  * /  >  + -  >  << >>  >  &  >  ^  >  |
//! ```
//!
//! The string is never handed to a host evaluator; the restricted grammar
//! (numbers, four arithmetic operators, six bitwise operators, parentheses)
//! is enforced structurally here. Anything else is a syntax error.

use crate::calculator::errors::EvalError;
use crate::parser::ast::{BinOp, Expr, UnOp};
use crate::parser::lexer::Token;

/// Parser over a substituted token stream.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream as one expression.
    ///
    /// Trailing tokens after a complete expression are a syntax error
    /// (`5 5`, `1+2)`).
    pub fn parse_expression(mut self) -> Result<Expr, EvalError> {
        if self.tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        let expr = self.parse_bit_or()?;
        if self.position != self.tokens.len() {
            return Err(EvalError::SyntaxError);
        }
        Ok(expr)
    }

    /// Parse bitwise OR (|)
    fn parse_bit_or(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_bit_xor()?;

        while self.match_token(&Token::Pipe) {
            let right = Box::new(self.parse_bit_xor()?);
            left = Expr::BinaryOp {
                op: BinOp::BitOr,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse bitwise XOR (^)
    fn parse_bit_xor(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_bit_and()?;

        while self.match_token(&Token::Caret) {
            let right = Box::new(self.parse_bit_and()?);
            left = Expr::BinaryOp {
                op: BinOp::BitXor,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse bitwise AND (&)
    fn parse_bit_and(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_shift()?;

        while self.match_token(&Token::Amp) {
            let right = Box::new(self.parse_shift()?);
            left = Expr::BinaryOp {
                op: BinOp::BitAnd,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse bitwise shift (<< >>)
    fn parse_shift(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = if self.match_token(&Token::Shl) {
                BinOp::Shl
            } else if self.match_token(&Token::Shr) {
                BinOp::Shr
            } else {
                break;
            };

            let right = Box::new(self.parse_additive()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = if self.match_token(&Token::Plus) {
                BinOp::Add
            } else if self.match_token(&Token::Minus) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_multiplicative()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.match_token(&Token::Star) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash) {
                BinOp::Div
            } else {
                break;
            };

            let right = Box::new(self.parse_unary()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse unary (- ~ +)
    fn parse_unary(&mut self) -> Result<Expr, EvalError> {
        if self.match_token(&Token::Minus) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::Neg,
                operand,
            });
        }

        if self.match_token(&Token::Tilde) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::BitNot,
                operand,
            });
        }

        if self.match_token(&Token::Plus) {
            // unary plus: just return the operand
            return self.parse_unary();
        }

        self.parse_primary()
    }

    /// Parse primary (literals and parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, EvalError> {
        if let Some(Token::Number { value, .. }) = self.peek() {
            let value = *value;
            self.advance();
            return Ok(Expr::Number(value));
        }

        if self.match_token(&Token::LParen) {
            let expr = self.parse_bit_or()?;
            if !self.match_token(&Token::RParen) {
                return Err(EvalError::SyntaxError);
            }
            return Ok(expr);
        }

        // identifiers are substituted away before parsing; one reaching
        // this point (or any operator in operand position) is malformed
        Err(EvalError::SyntaxError)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn match_token(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn parse(s: &str) -> Result<Expr, EvalError> {
        let tokens = Lexer::new(s).tokenize()?;
        Parser::new(tokens).parse_expression()
    }

    #[test]
    fn test_precedence_shift_below_additive() {
        // 1 << 2 + 3 parses as 1 << (2 + 3)
        let expr = parse("1<<2+3").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::Shl,
                right,
                ..
            } => {
                assert!(
                    matches!(*right, Expr::BinaryOp { op: BinOp::Add, .. })
                );
            }
            other => panic!("expected shift at root, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence_and_xor_or() {
        // 1 | 2 ^ 3 & 4 parses as 1 | (2 ^ (3 & 4))
        let expr = parse("1|2^3&4").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::BitOr,
                right,
                ..
            } => match *right {
                Expr::BinaryOp {
                    op: BinOp::BitXor,
                    right,
                    ..
                } => {
                    assert!(matches!(
                        *right,
                        Expr::BinaryOp { op: BinOp::BitAnd, .. }
                    ));
                }
                other => panic!("expected xor, got {:?}", other),
            },
            other => panic!("expected or at root, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_binds_tightest() {
        // ~1 + 2 parses as (~1) + 2
        let expr = parse("~1+2").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::Add,
                left,
                ..
            } => {
                assert!(
                    matches!(*left, Expr::UnaryOp { op: UnOp::BitNot, .. })
                );
            }
            other => panic!("expected add at root, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(parse("5 5"), Err(EvalError::SyntaxError));
        assert_eq!(parse("(1+2"), Err(EvalError::SyntaxError));
        assert_eq!(parse("1+"), Err(EvalError::SyntaxError));
        assert_eq!(parse("*3"), Err(EvalError::SyntaxError));
        assert_eq!(parse(""), Err(EvalError::EmptyExpression));
    }
}
