//! Distance parsing.

use paceline_model::RawValue;

/// Unitless values at or above this threshold are read as meters.
///
/// This is a deliberate approximation carried over from the source data:
/// race distances between 100 and 999 km do not occur in this domain, so a
/// bare `400` reads as 400 m (0.4 km) and a bare `42` as 42 km. Downstream
/// grouping depends on the heuristic staying deterministic, so it is a
/// named policy rather than a tunable.
pub const UNITLESS_METERS_THRESHOLD_KM: f64 = 100.0;

/// Parse a loosely-typed distance cell into canonical kilometers.
///
/// Numeric cells are unitless and go through the magnitude heuristic; text
/// goes through [`parse_distance_text`]. Never fails.
pub fn parse_distance(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(number) if number.is_finite() => Some(apply_magnitude_heuristic(*number)),
        RawValue::Number(_) => None,
        RawValue::Text(text) => parse_distance_text(text),
    }
}

/// Parse distance text into kilometers.
///
/// A leading numeric literal (comma tolerated as decimal separator) may be
/// followed by an optional `km` or `m` suffix. Without a suffix the
/// magnitude heuristic applies. Unknown suffixes and non-numeric input
/// yield `None`.
pub fn parse_distance_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (number, rest) = split_leading_number(trimmed)?;
    match rest.trim().to_ascii_lowercase().as_str() {
        "km" => Some(number),
        "m" => Some(number / 1000.0),
        "" => Some(apply_magnitude_heuristic(number)),
        _ => None,
    }
}

/// Parse a cell whose header already names kilometers (`DistanceKm`).
/// No magnitude heuristic; a redundant `km` suffix is tolerated.
pub fn parse_km(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(number) if number.is_finite() => Some(*number),
        RawValue::Number(_) => None,
        RawValue::Text(text) => {
            let (number, rest) = split_leading_number(text.trim())?;
            match rest.trim().to_ascii_lowercase().as_str() {
                "" | "km" => Some(number),
                _ => None,
            }
        }
    }
}

fn apply_magnitude_heuristic(value: f64) -> f64 {
    if value >= UNITLESS_METERS_THRESHOLD_KM {
        value / 1000.0
    } else {
        value
    }
}

/// Split a leading numeric literal off a string. Accepts digits and one
/// decimal separator (`.` or `,`); returns the parsed value and the rest.
fn split_leading_number(text: &str) -> Option<(f64, &str)> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_separator = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = idx + 1;
            }
            '.' | ',' if seen_digit && !seen_separator => {
                seen_separator = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let literal = text[..end].trim_end_matches(['.', ',']).replace(',', ".");
    let number: f64 = literal.parse().ok()?;
    Some((number, &text[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_units() {
        assert_eq!(parse_distance_text("1km"), Some(1.0));
        assert_eq!(parse_distance_text("1500m"), Some(1.5));
        assert_eq!(parse_distance_text("1000 m"), Some(1.0));
        assert_eq!(parse_distance_text("5 KM"), Some(5.0));
    }

    #[test]
    fn magnitude_heuristic_for_unitless_values() {
        assert_eq!(parse_distance_text("400"), Some(0.4));
        assert_eq!(parse_distance_text("42"), Some(42.0));
        assert_eq!(parse_distance_text("100"), Some(0.1));
        assert_eq!(parse_distance_text("99.9"), Some(99.9));
        assert_eq!(parse_distance(&RawValue::Number(400.0)), Some(0.4));
        assert_eq!(parse_distance(&RawValue::Number(5.0)), Some(5.0));
    }

    #[test]
    fn comma_as_decimal_separator() {
        assert_eq!(parse_distance_text("1,5km"), Some(1.5));
        assert_eq!(parse_distance_text("21,0975 km"), Some(21.0975));
    }

    #[test]
    fn rejects_unparseable_input() {
        assert_eq!(parse_distance_text(""), None);
        assert_eq!(parse_distance_text("far"), None);
        assert_eq!(parse_distance_text("5 miles"), None);
        assert_eq!(parse_distance(&RawValue::Number(f64::INFINITY)), None);
    }

    #[test]
    fn km_cells_skip_the_heuristic() {
        assert_eq!(parse_km(&RawValue::Number(400.0)), Some(400.0));
        assert_eq!(parse_km(&RawValue::Text("5".to_string())), Some(5.0));
        assert_eq!(parse_km(&RawValue::Text("5km".to_string())), Some(5.0));
        assert_eq!(parse_km(&RawValue::Text("five".to_string())), None);
    }
}
