//! Helpers for locating the trailing number of the expression buffer.
//!
//! Two views of "the current number" exist:
//!
//! - the *number segment*: everything after the last operator character. Used by
//!   ClearEntry and the duplicate decimal point check.
//! - the *operand*: the trailing run of digits and `.` plus a unary minus in front of it,
//!   when that minus starts the buffer or follows another operator. Used by sign toggle,
//!   square root and percent.
//!
//! Numeric edits split the buffer into an owned head and operand, transform the operand
//! and concatenate the result back.

use crate::engine::format::format_number;
use crate::engine::token::is_operator_char;
use crate::error::CalcError;

/// Byte offset at which the number segment starts.
pub fn number_segment_start(buffer: &str) -> usize {
    buffer.rfind(is_operator_char).map_or(0, |idx| idx + 1)
}

/// Text after the last operator character.
pub fn number_segment(buffer: &str) -> &str {
    &buffer[number_segment_start(buffer)..]
}

/// Split the buffer into `(head, operand)` where operand carries its unary sign.
pub fn split_operand(buffer: &str) -> (&str, &str) {
    let head = buffer.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    let mut start = head.len();
    if let Some(before_sign) = head.strip_suffix('-') {
        if before_sign.is_empty() || before_sign.ends_with(is_operator_char) {
            start = before_sign.len();
        }
    }
    buffer.split_at(start)
}

/// Parse operand text as a float.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    if text.is_empty() {
        return Err(CalcError::UnparsableSegment);
    }
    text.parse::<f64>()
        .map_err(|_| CalcError::UnparsableSegment)
}

/// Replace the trailing operand with `transform(operand)`, formatted.
pub fn rewrite_operand<F>(buffer: &str, transform: F) -> Result<String, CalcError>
where
    F: FnOnce(f64) -> Result<f64, CalcError>,
{
    let (head, operand) = split_operand(buffer);
    let value = transform(parse_operand(operand)?)?;

    let mut rebuilt = String::with_capacity(buffer.len() + 4);
    rebuilt.push_str(head);
    rebuilt.push_str(&format_number(value));
    Ok(rebuilt)
}
