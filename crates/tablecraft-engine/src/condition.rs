//! Condition rules for value-based highlighting

use crate::error::{Error, Result};

/// Comparison tolerance for `EqualTo`; exact floating equality is not used.
const EQUAL_EPSILON: f64 = 0.001;

/// A condition evaluated against numeric cell values
///
/// Parsed once at the tool boundary; the resolver only ever sees valid
/// conditions. Non-numeric cells are filtered by the caller and never reach
/// [`Condition::matches`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// value > operand
    GreaterThan(f64),
    /// value < operand
    LessThan(f64),
    /// |value - operand| < 0.001
    EqualTo(f64),
    /// value within the closed interval, operand order-independent
    Between(f64, f64),
}

impl Condition {
    /// Parse a condition from a kind name and comma-separated operand text
    ///
    /// `between` takes exactly two operands, the other kinds exactly one.
    pub fn parse(kind: &str, operand_text: &str) -> Result<Self> {
        let operands = parse_operands(operand_text)?;

        match kind.to_ascii_lowercase().as_str() {
            "greater_than" => Ok(Condition::GreaterThan(single(kind, &operands)?)),
            "less_than" => Ok(Condition::LessThan(single(kind, &operands)?)),
            "equal_to" => Ok(Condition::EqualTo(single(kind, &operands)?)),
            "between" => {
                if operands.len() != 2 {
                    return Err(Error::ConditionArity {
                        kind: "between".into(),
                        expected: 2,
                        actual: operands.len(),
                    });
                }
                Ok(Condition::Between(operands[0], operands[1]))
            }
            _ => Err(Error::UnknownConditionKind(kind.to_string())),
        }
    }

    /// Decide whether a numeric value satisfies this condition
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Condition::GreaterThan(v) => value > v,
            Condition::LessThan(v) => value < v,
            Condition::EqualTo(v) => (value - v).abs() < EQUAL_EPSILON,
            Condition::Between(a, b) => value >= a.min(b) && value <= a.max(b),
        }
    }
}

fn parse_operands(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| Error::InvalidConditionValue(part.to_string()))
        })
        .collect()
}

fn single(kind: &str, operands: &[f64]) -> Result<f64> {
    if operands.len() != 1 {
        return Err(Error::ConditionArity {
            kind: kind.to_ascii_lowercase(),
            expected: 1,
            actual: operands.len(),
        });
    }
    Ok(operands[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Condition::parse("greater_than", "50").unwrap(),
            Condition::GreaterThan(50.0)
        );
        assert_eq!(
            Condition::parse("BETWEEN", "10, 20").unwrap(),
            Condition::Between(10.0, 20.0)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Condition::parse("approximately", "50"),
            Err(Error::UnknownConditionKind(_))
        ));
        assert!(matches!(
            Condition::parse("greater_than", "fifty"),
            Err(Error::InvalidConditionValue(_))
        ));
        assert!(matches!(
            Condition::parse("between", "10"),
            Err(Error::ConditionArity { .. })
        ));
        assert!(matches!(
            Condition::parse("less_than", "1,2"),
            Err(Error::ConditionArity { .. })
        ));
    }

    #[test]
    fn test_comparisons() {
        assert!(Condition::GreaterThan(50.0).matches(50.1));
        assert!(!Condition::GreaterThan(50.0).matches(50.0));
        assert!(Condition::LessThan(50.0).matches(49.9));
        assert!(!Condition::LessThan(50.0).matches(50.0));
    }

    #[test]
    fn test_equal_to_uses_epsilon() {
        assert!(Condition::EqualTo(50.0005).matches(50.0));
        assert!(!Condition::EqualTo(50.01).matches(50.0));
    }

    #[test]
    fn test_between_is_order_independent() {
        assert!(Condition::Between(10.0, 5.0).matches(7.0));
        assert!(Condition::Between(5.0, 10.0).matches(7.0));
        // Closed interval
        assert!(Condition::Between(5.0, 10.0).matches(5.0));
        assert!(Condition::Between(5.0, 10.0).matches(10.0));
        assert!(!Condition::Between(5.0, 10.0).matches(10.5));
    }
}
