use serde_json::Value;
use std::fmt;

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// A difficulty or quality score, always within `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(f64);

impl Rating {
    pub fn clamped(value: f64) -> Rating {
        Rating(value.clamp(MIN_RATING, MAX_RATING))
    }

    /// Reads a submitted score. Numbers and numeric strings are accepted;
    /// anything else (including non-finite values) is treated as absent.
    pub fn from_value(value: Option<&Value>) -> Option<Rating> {
        let parsed = match value? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_leading_number(text),
            _ => None,
        }?;

        parsed.is_finite().then(|| Rating::clamped(parsed))
    }

    #[cfg(test)]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the longest numeric prefix, so `"4/5"` reads as `4`.
fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let numeric_len = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(text.len());

    // every char in the prefix is ASCII, so each index is a boundary
    (1..=numeric_len)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}
