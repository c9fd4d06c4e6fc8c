//! Parsing of keypad-style expressions such as `0101+1111=`.
//!
//! Each operand is written in base 2 and is taken as an 8-bit pattern,
//! so `11111111` is -1.  There are no spaces on the keypad, but we
//! tolerate them.  The trailing `=` is optional.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use regex::Regex;
use tracing::{Level, event};

use alu::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub left: Signed8Bit,
    pub operator: Operator,
    pub right: Signed8Bit,
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{:08b} {} {:08b}",
            self.left, self.operator, self.right
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadExpression {
    NoOperator(String),
    EmptyOperand,
    NotBinary(String),
    TooWide(String),
    Internal(String),
}

impl Display for BadExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            BadExpression::NoOperator(input) => {
                write!(f, "expression '{input}' contains no operator (one of + - * /)")
            }
            BadExpression::EmptyOperand => f.write_str("an operand is missing"),
            BadExpression::NotBinary(operand) => {
                write!(f, "operand '{operand}' should contain only the digits 0 and 1")
            }
            BadExpression::TooWide(operand) => write!(
                f,
                "operand '{operand}' has more than {} bits",
                alu::BITS
            ),
            BadExpression::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl Error for BadExpression {}

pub fn parse_expression(input: &str) -> Result<Expression, BadExpression> {
    let pattern: &'static str = r"[-+*/]";
    let operator_rx = Regex::new(pattern).map_err(|e| {
        BadExpression::Internal(format!(
            "failed to compile regular expression '{pattern}': {e}"
        ))
    })?;
    let text = input.trim();
    let text = text.strip_suffix('=').unwrap_or(text);
    let found = match operator_rx.find(text) {
        Some(m) => m,
        None => {
            return Err(BadExpression::NoOperator(input.trim().to_string()));
        }
    };
    let operator = found
        .as_str()
        .chars()
        .next()
        .map(Operator::try_from)
        .and_then(Result::ok)
        .ok_or_else(|| {
            BadExpression::Internal(format!("'{}' is not an operator", found.as_str()))
        })?;
    let left = parse_operand(&text[..found.start()])?;
    let right = parse_operand(&text[found.end()..])?;
    let expr = Expression {
        left,
        operator,
        right,
    };
    event!(Level::DEBUG, "parsed '{}' as {}", input.trim(), expr);
    Ok(expr)
}

/// Parse a base-2 operand of at most 8 digits into a bit pattern.
pub fn parse_operand(text: &str) -> Result<Signed8Bit, BadExpression> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BadExpression::EmptyOperand);
    }
    if text.len() > alu::BITS as usize {
        // Leading zeroes don't count against the width.
        let significant = text.trim_start_matches('0');
        if significant.len() > alu::BITS as usize {
            return if significant.chars().all(|ch| ch == '0' || ch == '1') {
                Err(BadExpression::TooWide(text.to_string()))
            } else {
                Err(BadExpression::NotBinary(text.to_string()))
            };
        }
    }
    let mut word = Unsigned8Bit::ZERO;
    for ch in text.chars() {
        let bit = match ch {
            '0' => Bit::Zero,
            '1' => Bit::One,
            _ => {
                return Err(BadExpression::NotBinary(text.to_string()));
            }
        };
        word = word.shift_in(bit);
    }
    Ok(word.reinterpret_as_signed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: i8) -> Signed8Bit {
        Signed8Bit::from(n)
    }

    #[test]
    fn test_parse_keypad_expression() {
        assert_eq!(
            parse_expression("0101+0011="),
            Ok(Expression {
                left: s(5),
                operator: Operator::Add,
                right: s(3),
            })
        );
    }

    #[test]
    fn test_parse_all_operators() {
        for op in Operator::all() {
            let text = format!("1111{}10", op.symbol());
            let expr = parse_expression(&text).expect("valid test data");
            assert_eq!(expr.operator, op);
            assert_eq!(expr.left, s(15));
            assert_eq!(expr.right, s(2));
        }
    }

    #[test]
    fn test_parse_tolerates_spaces_and_missing_equals() {
        assert_eq!(
            parse_expression("  101 * 11  "),
            Ok(Expression {
                left: s(5),
                operator: Operator::Multiply,
                right: s(3),
            })
        );
    }

    #[test]
    fn test_operands_are_bit_patterns() {
        assert_eq!(parse_operand("11111111"), Ok(s(-1)));
        assert_eq!(parse_operand("10000000"), Ok(s(-128)));
        assert_eq!(parse_operand("01111111"), Ok(s(127)));
        assert_eq!(parse_operand("0000000011"), Ok(s(3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_expression("0101"),
            Err(BadExpression::NoOperator("0101".to_string()))
        );
        assert_eq!(parse_expression("+0101"), Err(BadExpression::EmptyOperand));
        assert_eq!(parse_expression("0101/="), Err(BadExpression::EmptyOperand));
        assert_eq!(
            parse_expression("0102+1"),
            Err(BadExpression::NotBinary("0102".to_string()))
        );
        assert_eq!(
            parse_expression("1+1+1"),
            Err(BadExpression::NotBinary("1+1".to_string()))
        );
        assert_eq!(
            parse_operand("111111111"),
            Err(BadExpression::TooWide("111111111".to_string()))
        );
    }
}
