//! Elapsed-time parsing.

use paceline_model::RawValue;

/// Parse a loosely-typed elapsed-time cell into canonical seconds.
///
/// Numeric cells pass through as seconds unchanged (finite values only).
/// Text goes through [`parse_time_text`]. Never fails; anything
/// unparseable is `None`.
pub fn parse_time(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(number) if number.is_finite() => Some(*number),
        RawValue::Number(_) => None,
        RawValue::Text(text) => parse_time_text(text),
    }
}

/// Parse elapsed-time text into seconds.
///
/// Accepted shapes after stripping one trailing unit annotation
/// (`"20:00 mins"`):
/// - 1 segment: bare seconds (`"45"`)
/// - 2 segments: `m:ss` (`"12:34"` = 754)
/// - 3 segments: `h:mm:ss` (`"1:02:03"` = 3723)
///
/// Any other shape or a non-numeric segment yields `None`.
pub fn parse_time_text(text: &str) -> Option<f64> {
    let stripped = strip_unit_annotation(text.trim());
    if stripped.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    for segment in stripped.split(':') {
        let number: f64 = segment.trim().parse().ok()?;
        if !number.is_finite() {
            return None;
        }
        parts.push(number);
    }

    match parts.as_slice() {
        [seconds] => Some(*seconds),
        [minutes, seconds] => Some(minutes * 60.0 + seconds),
        [hours, minutes, seconds] => Some(hours * 3600.0 + minutes * 60.0 + seconds),
        _ => None,
    }
}

/// Strip one trailing alphabetic annotation such as `" mins"` or `"s"`.
fn strip_unit_annotation(text: &str) -> &str {
    text.trim_end_matches(|ch: char| ch.is_ascii_alphabetic())
        .trim_end()
}
