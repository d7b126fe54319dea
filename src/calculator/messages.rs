//! Localized message catalog
//!
//! All human-readable text lives here in both supported locales; the lexer,
//! parser, and evaluator only ever report [`EvalError`] values, which are
//! rendered at the line boundary. Switching the language never affects
//! computation.

use crate::calculator::errors::EvalError;
use crate::display::bits::EndianMode;

/// Supported output locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Zh,
    #[default]
    En,
}

/// Confirmation text for a recognized `endian:` directive.
pub fn endian_set_message(mode: EndianMode, language: Language) -> String {
    match (mode, language) {
        (EndianMode::Little, Language::Zh) => {
            "已设置为小端字节序 (Little Endian)".to_string()
        }
        (EndianMode::Little, Language::En) => {
            "Set to Little Endian".to_string()
        }
        (EndianMode::Big, Language::Zh) => {
            "已设置为大端字节序 (Big Endian)".to_string()
        }
        (EndianMode::Big, Language::En) => "Set to Big Endian".to_string(),
        (EndianMode::Disabled, Language::Zh) => {
            "已关闭字节序显示".to_string()
        }
        (EndianMode::Disabled, Language::En) => {
            "Endian display disabled".to_string()
        }
    }
}

/// Error text for an unrecognized `endian:` token.
pub fn unknown_endian_message(token: &str, language: Language) -> String {
    match language {
        Language::Zh => format!("错误: 未知的字节序类型: {}", token),
        Language::En => format!("Error: Unknown endian type: {}", token),
    }
}

/// Render an evaluation error for display as a trailing line comment.
///
/// Evaluator faults carry the locale's "Error:" prefix; the undefined
/// variable report stands on its own.
pub fn error_message(error: &EvalError, language: Language) -> String {
    match (error, language) {
        (EvalError::UndefinedVariables(names), Language::Zh) => {
            format!("变量未定义: {}", names.join(", "))
        }
        (EvalError::UndefinedVariables(names), Language::En) => {
            format!("undefined variable(s): {}", names.join(", "))
        }
        (EvalError::EmptyExpression, Language::Zh) => {
            "错误: 表达式为空".to_string()
        }
        (EvalError::IllegalCharacter, Language::Zh) => {
            "错误: 包含非法字符".to_string()
        }
        (EvalError::DivisionByZero, Language::Zh) => {
            "错误: 除数不能为零".to_string()
        }
        (EvalError::SyntaxError, Language::Zh) => {
            "错误: 表达式语法错误".to_string()
        }
        (EvalError::Computation(detail), Language::Zh) => {
            format!("错误: 计算错误: {}", detail)
        }
        (err, Language::En) => format!("Error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_rendering_both_locales() {
        let err = EvalError::DivisionByZero;
        assert_eq!(
            error_message(&err, Language::En),
            "Error: division by zero"
        );
        assert_eq!(error_message(&err, Language::Zh), "错误: 除数不能为零");
    }

    #[test]
    fn test_undefined_variables_listed_in_order() {
        let err = EvalError::UndefinedVariables(vec![
            "b".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(
            error_message(&err, Language::En),
            "undefined variable(s): b, a"
        );
    }

    #[test]
    fn test_endian_messages() {
        assert_eq!(
            endian_set_message(EndianMode::Big, Language::En),
            "Set to Big Endian"
        );
        assert_eq!(
            unknown_endian_message("sideways", Language::En),
            "Error: Unknown endian type: sideways"
        );
    }
}
