//! Fixed decimal formatting for values written back into the buffer.

/// Maximum number of digits kept after the decimal point.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Format a value the way the display shows it.
///
/// Rounds to [`MAX_FRACTION_DIGITS`] fractional digits, drops trailing zeros and a bare
/// decimal point, never groups digits and never switches to exponent notation. Negative
/// zero prints as `0`.
pub fn format_number(value: f64) -> String {
    let mut text = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    if text.contains('.') {
        let kept = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(kept);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
