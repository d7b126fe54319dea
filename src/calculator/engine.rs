//! Document processor
//!
//! [`Calculator`] owns the per-pass state (variable store, endian mode) and
//! drives each line through classification, lexing, substitution, parsing,
//! and evaluation. Every error is caught at the line boundary and becomes a
//! [`LineResult::Failure`]; nothing aborts the pass.

use crate::calculator::errors::EvalError;
use crate::calculator::eval::evaluate;
use crate::calculator::messages::{
    endian_set_message, error_message, unknown_endian_message, Language,
};
use crate::calculator::output;
use crate::calculator::store::VarStore;
use crate::calculator::substitute::{render_tokens, substitute};
use crate::calculator::value::Num;
use crate::display::bits::{bit_display, EndianMode};
use crate::parser::expressions::Parser;
use crate::parser::lexer::{scan_identifiers, Lexer, Token};
use crate::parser::line::{classify_line, DirectiveKind, ParsedLine};

/// Per-line outcome of one document pass.
#[derive(Debug, Clone, PartialEq)]
pub enum LineResult {
    Blank,
    Comment,

    /// Byte-order change confirmation or rejection; never carries a value.
    Directive { message: String },

    Success {
        value: Num,
        label: Option<String>,
        /// Compact rendering of the expression with variables substituted,
        /// present only when at least one variable was replaced.
        substituted: Option<String>,
        /// Bit-layout block, present when `bitmap` was requested, the
        /// endian mode is enabled, and the value is a non-negative whole.
        bit_block: Option<String>,
        /// Whether the line carried the `bitmap` keyword.
        bitmap: bool,
    },

    Failure {
        label: Option<String>,
        message: String,
    },
}

/// A built-in example document, used by the TUI's load-example action.
pub const EXAMPLE_TEXT: &str = "\
# Bitwise operations example

# Set little endian display
endian: little

# Normal calculation (decimal only)
a = 0xFF
b = 0x0F
sum = a + b

# View bit structure with bitmap
bitmap view_a = a
bitmap view_b = b

# Bitwise operations
and_result = a & b
or_result = a | b

# View bitwise operation results with bitmap
bitmap view_and = and_result
bitmap view_or = or_result

# Percentage calculation
price = 100
discount = 15%
final = price * (1 - discount)
";

/// The scratchpad document processor.
///
/// One instance evaluates whole documents; every call to
/// [`Calculator::process_text`] is an independent pass starting from an
/// empty variable store and a disabled endian mode.
pub struct Calculator {
    lines: Vec<String>,
    results: Vec<LineResult>,
    variables: VarStore,
    endian: EndianMode,
    language: Language,
}

impl Calculator {
    pub fn new(language: Language) -> Self {
        Self {
            lines: Vec::new(),
            results: Vec::new(),
            variables: VarStore::new(),
            endian: EndianMode::Disabled,
            language,
        }
    }

    /// Set the output locale. Affects message text only, never computation.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The trimmed input lines of the last pass, 1:1 with [`results`].
    ///
    /// [`results`]: Calculator::results
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn results(&self) -> &[LineResult] {
        &self.results
    }

    /// Variable bindings of the last pass, in insertion order.
    pub fn variables(&self) -> &VarStore {
        &self.variables
    }

    /// Evaluate a whole document in one pass, top to bottom.
    ///
    /// All per-pass state is reset first, so repeated calls on the same
    /// text always yield identical results.
    pub fn process_text(&mut self, text: &str) {
        self.lines.clear();
        self.results.clear();
        self.variables.clear();
        self.endian = EndianMode::Disabled;

        for raw in text.trim().split('\n') {
            let line = raw.trim().to_string();
            let result = self.process_line(&line);
            self.lines.push(line);
            self.results.push(result);
        }
    }

    /// Render the last pass as annotated text.
    pub fn format_output(&self) -> String {
        output::format_output(&self.lines, &self.results)
    }

    fn process_line(&mut self, line: &str) -> LineResult {
        match classify_line(line) {
            ParsedLine::Blank => LineResult::Blank,
            ParsedLine::Comment => LineResult::Comment,
            ParsedLine::Directive(DirectiveKind::Endian(mode)) => {
                self.endian = mode;
                LineResult::Directive {
                    message: endian_set_message(mode, self.language),
                }
            }
            ParsedLine::Directive(DirectiveKind::Unknown(token)) => {
                // mode unchanged
                LineResult::Directive {
                    message: unknown_endian_message(&token, self.language),
                }
            }
            ParsedLine::Expression {
                label,
                expr,
                bitmap,
            } => match self.evaluate_expression(&expr, &label, bitmap) {
                Ok(result) => result,
                Err(error) => LineResult::Failure {
                    label,
                    message: error_message(&error, self.language),
                },
            },
        }
    }

    fn evaluate_expression(
        &mut self,
        expr: &str,
        label: &Option<String>,
        bitmap: bool,
    ) -> Result<LineResult, EvalError> {
        let tokens = match Lexer::new(expr).tokenize() {
            Ok(tokens) => tokens,
            Err(error) => {
                // undefined variables outrank lexical faults on a line
                // carrying both
                let undefined: Vec<String> = scan_identifiers(expr)
                    .into_iter()
                    .filter(|name| self.variables.get(name).is_none())
                    .collect();
                if undefined.is_empty() {
                    return Err(error);
                }
                return Err(EvalError::UndefinedVariables(undefined));
            }
        };
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let has_hex_bin = tokens.iter().any(Token::is_hex_bin);
        let has_bitwise = tokens.iter().any(Token::is_bitwise);
        let use_hex_format = has_hex_bin || has_bitwise;

        let sub = substitute(&tokens, &self.variables, use_hex_format);
        if !sub.undefined.is_empty() {
            return Err(EvalError::UndefinedVariables(sub.undefined));
        }

        let ast = Parser::new(sub.tokens.clone()).parse_expression()?;
        let mut value = evaluate(&ast)?;

        // bitwise operators and explicit hex/binary literals force a
        // whole-number result
        if has_hex_bin || has_bitwise {
            value = value.truncate();
        }

        if let Some(name) = label {
            self.variables.set(name, value);
        }

        let substituted = if sub.replaced_any {
            Some(render_tokens(&sub.tokens))
        } else {
            None
        };

        let bit_block = if bitmap {
            match value {
                Num::Int(n) => bit_display(n, self.endian, self.language),
                Num::Float(_) => None,
            }
        } else {
            None
        };

        Ok(LineResult::Success {
            value,
            label: label.clone(),
            substituted,
            bit_block,
            bitmap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Calculator {
        let mut calc = Calculator::new(Language::En);
        calc.process_text(text);
        calc
    }

    fn value_of(result: &LineResult) -> Num {
        match result {
            LineResult::Success { value, .. } => *value,
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_one_result_per_line() {
        let calc = run("a = 1\n\n# note\nendian: big\nb = a + 1");
        assert_eq!(calc.lines().len(), 5);
        assert_eq!(calc.results().len(), 5);
        assert!(matches!(calc.results()[1], LineResult::Blank));
        assert!(matches!(calc.results()[2], LineResult::Comment));
        assert!(matches!(calc.results()[3], LineResult::Directive { .. }));
    }

    #[test]
    fn test_variables_accumulate() {
        let calc = run("a = 100\nb = 200\nsum = a + b");
        assert_eq!(value_of(&calc.results()[0]), Num::Int(100));
        assert_eq!(value_of(&calc.results()[1]), Num::Int(200));
        assert_eq!(value_of(&calc.results()[2]), Num::Int(300));

        match &calc.results()[2] {
            LineResult::Success { substituted, .. } => {
                assert_eq!(substituted.as_deref(), Some("100+200"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_forward_only_visibility() {
        let calc = run("b = a\na = 1");
        match &calc.results()[0] {
            LineResult::Failure { label, message } => {
                assert_eq!(label.as_deref(), Some("b"));
                assert_eq!(message, "undefined variable(s): a");
            }
            other => panic!("expected failure, got {:?}", other),
        }

        let calc = run("a = 1\nb = a");
        assert_eq!(value_of(&calc.results()[1]), Num::Int(1));
    }

    #[test]
    fn test_undefined_variable_outranks_illegal_character() {
        let calc = run("x = ghost @ 1");
        match &calc.results()[0] {
            LineResult::Failure { label, message } => {
                assert_eq!(label.as_deref(), Some("x"));
                assert_eq!(message, "undefined variable(s): ghost");
            }
            other => panic!("expected failure, got {:?}", other),
        }

        // with every variable bound, the lexical fault is reported
        let calc = run("a = 1\na @ 2");
        match &calc.results()[1] {
            LineResult::Failure { message, .. } => {
                assert_eq!(message, "Error: illegal characters");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_assignment_does_not_bind() {
        let calc = run("x = 5 / 0\ny = x + 1");
        match &calc.results()[0] {
            LineResult::Failure { message, .. } => {
                assert_eq!(message, "Error: division by zero");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        match &calc.results()[1] {
            LineResult::Failure { message, .. } => {
                assert_eq!(message, "undefined variable(s): x");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(calc.variables().is_empty());
    }

    #[test]
    fn test_hex_substitution_in_annotation() {
        let calc = run("color = 0xFF8040\nred = (color >> 16) & 0xFF");
        assert_eq!(value_of(&calc.results()[1]), Num::Int(255));
        match &calc.results()[1] {
            LineResult::Success { substituted, .. } => {
                assert_eq!(substituted.as_deref(), Some("(0xFF8040>>16)&0xFF"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_percentage_scenario() {
        let calc =
            run("price = 100\ndiscount = 15%\nfinal = price * (1 - discount)");
        assert_eq!(value_of(&calc.results()[1]), Num::Float(0.15));
        assert_eq!(value_of(&calc.results()[2]), Num::Int(85));
    }

    #[test]
    fn test_bitmap_requires_enabled_mode() {
        let calc = run("endian: little\nendian: none\nbitmap x = 5");
        match &calc.results()[2] {
            LineResult::Success {
                value,
                bit_block,
                bitmap,
                ..
            } => {
                assert_eq!(*value, Num::Int(5));
                assert!(bit_block.is_none());
                assert!(bitmap);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_bitmap_block_present_when_enabled() {
        let calc = run("endian: little\nbitmap x = 0xFF");
        match &calc.results()[1] {
            LineResult::Success { bit_block, .. } => {
                let block = bit_block.as_deref().unwrap();
                assert!(block.contains("0b11111111"));
                assert!(block.contains("|0 1 2 3 |4 5 6 7 |"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_endian_keeps_mode() {
        let calc = run("endian: little\nendian: sideways\nbitmap x = 1");
        match &calc.results()[1] {
            LineResult::Directive { message } => {
                assert_eq!(message, "Error: Unknown endian type: sideways");
            }
            other => panic!("expected directive, got {:?}", other),
        }
        // mode still little, so the bitmap line renders a block
        match &calc.results()[2] {
            LineResult::Success { bit_block, .. } => {
                assert!(bit_block.is_some());
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_pass_state_never_leaks() {
        let mut calc = Calculator::new(Language::En);
        calc.process_text("endian: big\na = 1");
        let first = calc.results().to_vec();

        // endian mode and variables reset between passes
        calc.process_text("bitmap x = 5");
        match &calc.results()[0] {
            LineResult::Success { bit_block, .. } => {
                assert!(bit_block.is_none());
            }
            other => panic!("expected success, got {:?}", other),
        }

        calc.process_text("endian: big\na = 1");
        assert_eq!(calc.results(), &first[..]);
    }

    #[test]
    fn test_literal_round_trip() {
        let calc = run("0xFF\n255\n0b1010\n10");
        assert_eq!(value_of(&calc.results()[0]), Num::Int(255));
        assert_eq!(value_of(&calc.results()[1]), Num::Int(255));
        assert_eq!(value_of(&calc.results()[2]), Num::Int(10));
        assert_eq!(value_of(&calc.results()[3]), Num::Int(10));
    }

    #[test]
    fn test_bitwise_forces_integer() {
        let calc = run("0xFF & 0x0F");
        assert_eq!(value_of(&calc.results()[0]), Num::Int(15));
    }

    #[test]
    fn test_empty_expression_after_stripping() {
        let calc = run("x = # nothing");
        match &calc.results()[0] {
            LineResult::Failure { label, message } => {
                assert_eq!(label.as_deref(), Some("x"));
                assert_eq!(message, "Error: empty expression");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_localized_messages() {
        let mut calc = Calculator::new(Language::Zh);
        calc.process_text("x = 1 / 0");
        match &calc.results()[0] {
            LineResult::Failure { message, .. } => {
                assert_eq!(message, "错误: 除数不能为零");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
