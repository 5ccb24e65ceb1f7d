//! Left-to-right arithmetic evaluator.
//!
//! A single pass over the expression with an operand stack and an operator stack. An
//! incoming operator first reduces every stacked operator whose precedence is greater
//! than or equal to its own, so equal precedence folds left to right and `*`/`/` reduce
//! before a pending `+`/`-`.

use crate::engine::token::Operator;
use crate::error::CalcError;

/// Evaluate a finished expression string.
///
/// Accepts digits, `.`, and `+ - * /`. A `-` in operand position (at the start of the
/// text or right after another operator) is read as the sign of the following operand.
///
/// # Errors
///
/// - [`CalcError::InvalidExpression`] for any other character, for operand text that
///   does not parse, and for operators missing an operand.
/// - [`CalcError::DivisionByZero`] when the right operand of `/` is exactly zero.
pub fn evaluate(text: &str) -> Result<f64, CalcError> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Operator> = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut expect_operand = true;

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_ascii_digit() || ch == '.' || (ch == '-' && expect_operand) {
            chars.next();
            let mut end = start + ch.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !(next.is_ascii_digit() || next == '.') {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }

            let value = text[start..end]
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidExpression)?;
            operands.push(value);
            expect_operand = false;
        } else if let Some(op) = Operator::from_symbol(ch) {
            chars.next();
            while let Some(&top) = operators.last() {
                if top.precedence() < op.precedence() {
                    break;
                }
                operators.pop();
                reduce(&mut operands, top)?;
            }
            operators.push(op);
            expect_operand = true;
        } else {
            return Err(CalcError::InvalidExpression);
        }
    }

    while let Some(op) = operators.pop() {
        reduce(&mut operands, op)?;
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => Err(CalcError::InvalidExpression),
    }
}

/// Pop the right then the left operand, apply `op`, push the result.
fn reduce(operands: &mut Vec<f64>, op: Operator) -> Result<(), CalcError> {
    let right = operands.pop().ok_or(CalcError::InvalidExpression)?;
    let left = operands.pop().ok_or(CalcError::InvalidExpression)?;
    operands.push(apply(left, op, right)?);
    Ok(())
}

fn apply(left: f64, op: Operator, right: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide if right == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Divide => Ok(left / right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_precedence_reduces_first() {
        assert_eq!(evaluate("6+4*2"), Ok(14.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("2+3*4-5"), Ok(9.0));
    }

    #[test]
    fn test_equal_precedence_folds_left() {
        assert_eq!(evaluate("6-4-2"), Ok(0.0));
        assert_eq!(evaluate("8/2/2"), Ok(2.0));
        assert_eq!(evaluate("10-2+3"), Ok(11.0));
    }

    #[test]
    fn test_single_operand_and_decimals() {
        assert_eq!(evaluate("42"), Ok(42.0));
        assert_eq!(evaluate("3."), Ok(3.0));
        assert_eq!(evaluate(".5+.25"), Ok(0.75));
    }

    #[test]
    fn test_signed_operands() {
        assert_eq!(evaluate("-8"), Ok(-8.0));
        assert_eq!(evaluate("12*-3"), Ok(-36.0));
        assert_eq!(evaluate("-5+2"), Ok(-3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("5/0.0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("1+5/0*2"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("0/5"), Ok(0.0));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(evaluate("2x3"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("1e5"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("4 + 4"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_malformed_sequences() {
        assert_eq!(evaluate(""), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("12+"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("+5"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("1.2.3"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("-"), Err(CalcError::InvalidExpression));
        assert_eq!(evaluate("."), Err(CalcError::InvalidExpression));
    }
}
