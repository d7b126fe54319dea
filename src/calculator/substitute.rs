//! Variable substitution over the token stream
//!
//! Replaces identifier tokens with number tokens carrying the bound value
//! and a rendered lexeme. Working on tokens (rather than rewriting text)
//! means hex/binary literals can never be mistaken for identifiers and no
//! placeholder protection is needed: literal tokens pass through with their
//! lexeme untouched.

use crate::calculator::store::VarStore;
use crate::calculator::value::Num;
use crate::parser::lexer::Token;

/// Result of substituting variables into one expression.
pub struct Substitution {
    /// The token stream with identifiers replaced by their values.
    pub tokens: Vec<Token>,
    /// Whether any identifier was actually replaced.
    pub replaced_any: bool,
    /// Referenced identifiers with no binding, first-appearance order,
    /// deduplicated.
    pub undefined: Vec<String>,
}

/// Substitute bound variables into `tokens`.
///
/// When `hex_format` is set (the line contains a bitwise operator or an
/// explicit hex/binary literal), non-negative whole values render as
/// `0x` + uppercase hex; everything else renders in plain decimal.
pub fn substitute(
    tokens: &[Token],
    variables: &VarStore,
    hex_format: bool,
) -> Substitution {
    let mut out = Vec::with_capacity(tokens.len());
    let mut replaced_any = false;
    let mut undefined: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Ident(name) => match variables.get(name) {
                Some(value) => {
                    out.push(Token::Number {
                        value,
                        lexeme: render_value(value, hex_format),
                        hex_bin: false,
                    });
                    replaced_any = true;
                }
                None => {
                    if !undefined.iter().any(|n| n == name) {
                        undefined.push(name.clone());
                    }
                    out.push(token.clone());
                }
            },
            _ => out.push(token.clone()),
        }
    }

    Substitution {
        tokens: out,
        replaced_any,
        undefined,
    }
}

/// Render a substituted value as expression text.
fn render_value(value: Num, hex_format: bool) -> String {
    if hex_format {
        if let Some(n) = value.as_int() {
            if n >= 0 {
                return format!("0x{:X}", n);
            }
        }
    }
    value.to_plain_string()
}

/// Render a token stream back to compact expression text (no whitespace).
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::lexeme).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn lex(s: &str) -> Vec<Token> {
        Lexer::new(s).tokenize().unwrap()
    }

    #[test]
    fn test_decimal_substitution() {
        let mut vars = VarStore::new();
        vars.set("a", Num::Int(100));
        vars.set("b", Num::Int(200));

        let sub = substitute(&lex("a + b"), &vars, false);
        assert!(sub.replaced_any);
        assert!(sub.undefined.is_empty());
        assert_eq!(render_tokens(&sub.tokens), "100+200");
    }

    #[test]
    fn test_hex_substitution_format() {
        let mut vars = VarStore::new();
        vars.set("color", Num::Int(0xFF8040));

        let sub = substitute(&lex("(color >> 16) & 0xFF"), &vars, true);
        assert_eq!(render_tokens(&sub.tokens), "(0xFF8040>>16)&0xFF");
    }

    #[test]
    fn test_negative_and_float_values_stay_decimal() {
        let mut vars = VarStore::new();
        vars.set("n", Num::Int(-5));
        vars.set("f", Num::Float(0.15));

        let sub = substitute(&lex("n + f"), &vars, true);
        assert_eq!(render_tokens(&sub.tokens), "-5+0.15");
    }

    #[test]
    fn test_undefined_collected_in_order_without_duplicates() {
        let vars = VarStore::new();
        let sub = substitute(&lex("y + x + y"), &vars, false);
        assert!(!sub.replaced_any);
        assert_eq!(sub.undefined, vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_literals_pass_through_verbatim() {
        let mut vars = VarStore::new();
        vars.set("a", Num::Int(1));
        let sub = substitute(&lex("a + 0b1010 + 15%"), &vars, false);
        assert_eq!(render_tokens(&sub.tokens), "1+0b1010+15%");
    }
}
