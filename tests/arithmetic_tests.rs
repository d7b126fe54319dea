// Numeric semantics exercised through whole-document passes

use calcpaper::calculator::{Calculator, Language, LineResult};
use calcpaper::calculator::value::Num;

fn values(text: &str) -> Vec<Num> {
    let mut calc = Calculator::new(Language::En);
    calc.process_text(text);
    calc.results()
        .iter()
        .map(|r| match r {
            LineResult::Success { value, .. } => *value,
            other => panic!("expected success, got {:?}", other),
        })
        .collect()
}

fn annotate(text: &str) -> String {
    let mut calc = Calculator::new(Language::En);
    calc.process_text(text);
    calc.format_output()
}

#[test]
fn test_division_normalizes_whole_results() {
    assert_eq!(values("8 / 4"), vec![Num::Int(2)]);
    assert_eq!(values("1 / 4"), vec![Num::Float(0.25)]);
    assert_eq!(values("10 / 4"), vec![Num::Float(2.5)]);
}

#[test]
fn test_division_by_zero_either_operand_type() {
    let out = annotate("1 / 0");
    assert!(out.contains("# Error: division by zero"));
    let out = annotate("1 / (2 - 2)");
    assert!(out.contains("# Error: division by zero"));
}

#[test]
fn test_percent_literal() {
    assert_eq!(values("15%"), vec![Num::Float(0.15)]);
    assert_eq!(values("100%"), vec![Num::Int(1)]);
    assert_eq!(values("100 * (1 - 15%)"), vec![Num::Int(85)]);
}

#[test]
fn test_unary_operators() {
    assert_eq!(values("-5 + 3"), vec![Num::Int(-2)]);
    assert_eq!(values("3 - -5"), vec![Num::Int(8)]);
    assert_eq!(values("~0"), vec![Num::Int(-1)]);
    assert_eq!(values("~0xFF & 0xFFFF"), vec![Num::Int(0xFF00)]);
}

#[test]
fn test_bitwise_rejects_fractional_operands() {
    let out = annotate("1.5 & 3");
    assert!(out.contains("# Error: computation error:"));
    let out = annotate("1 << 1.5");
    assert!(out.contains("# Error: computation error:"));
}

#[test]
fn test_hex_literal_in_expression_truncates_result() {
    // a hex literal anywhere in the expression forces a whole result
    assert_eq!(values("0xA / 4"), vec![Num::Int(2)]);
}

#[test]
fn test_float_output_rounds_to_two_places() {
    let out = annotate("1 / 8");
    assert!(out.ends_with("= 0.12"));
    let out = annotate("1 / 3");
    assert!(out.ends_with("= 0.33"));
}

#[test]
fn test_lexical_errors() {
    let out = annotate("1 @ 2");
    assert!(out.contains("# Error: illegal characters"));
    // lone angle brackets are not operators
    let out = annotate("1 < 2");
    assert!(out.contains("# Error: illegal characters"));
    // a literal running into identifier characters
    let out = annotate("0b12");
    assert!(out.contains("# Error: illegal characters"));
}

#[test]
fn test_syntax_errors() {
    let out = annotate("1 +");
    assert!(out.contains("# Error: syntax error"));
    let out = annotate("(1 + 2");
    assert!(out.contains("# Error: syntax error"));
    let out = annotate("1 2");
    assert!(out.contains("# Error: syntax error"));
    let out = annotate("1.2.3");
    assert!(out.contains("# Error: syntax error"));
}

#[test]
fn test_empty_right_hand_side() {
    let out = annotate("x =");
    assert!(out.contains("# Error: empty expression"));
}
