//! The textual and JSON forms of a calculation's outcome.
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use alu::prelude::*;

use crate::expr::Expression;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub left: i8,
    pub operator: Operator,
    pub right: i8,
    /// The result as the eight-digit bit pattern shown on the lights.
    pub bits: String,
    pub result: i8,
    pub overflow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn new(expr: &Expression, value: Signed8Bit, overflow: bool) -> Report {
        Report {
            left: i8::from(expr.left),
            operator: expr.operator,
            right: i8::from(expr.right),
            bits: format!("{value:08b}"),
            result: i8::from(value),
            overflow,
            error: None,
        }
    }

    /// A report for a checked calculation which failed.  The register
    /// contents are still reported.
    pub fn failed(expr: &Expression, e: &ArithmeticError) -> Report {
        let (value, overflow) = match e {
            ArithmeticError::Overflow { wrapped } => (*wrapped, true),
            ArithmeticError::DivisionByZero => (Signed8Bit::ZERO, false),
        };
        Report {
            error: Some(e.to_string()),
            ..Report::new(expr, value, overflow)
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        writeln!(f, "Final result: {} ({})", self.bits, self.result)?;
        write!(f, "Overflow? {}", if self.overflow { "Yes" } else { "No" })
    }
}

#[cfg(test)]
mod tests {
    use super::Report;
    use crate::expr::parse_expression;
    use alu::prelude::*;

    #[test]
    fn test_text_report() {
        let expr = parse_expression("0101-1111=").expect("valid test data");
        let report = Report::new(&expr, Signed8Bit::from(-10_i8), false);
        assert_eq!(
            report.to_string(),
            "Final result: 11110110 (-10)\nOverflow? No"
        );
    }

    #[test]
    fn test_json_report() {
        let expr = parse_expression("01111111+1").expect("valid test data");
        let report = Report::new(&expr, Signed8Bit::MIN, true);
        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "left": 127,
                "operator": "Add",
                "right": 1,
                "bits": "10000000",
                "result": -128,
                "overflow": true,
            })
        );
    }

    #[test]
    fn test_failed_report() {
        let expr = parse_expression("1111/0").expect("valid test data");
        let report = Report::failed(&expr, &ArithmeticError::DivisionByZero);
        assert_eq!(report.error.as_deref(), Some("division by zero"));
        assert_eq!(report.result, 0);
    }
}
