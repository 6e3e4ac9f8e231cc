//! Parse a textual ROC description back into its boundary radius.
//!
//! Accepted forms (whitespace is free around tokens):
//!
//! ```text
//! |z| > 3
//! |z| > max(2, 3)
//! ```
//!
//! Anything else is a `MalformedRoc` error that carries the original text.

use crate::error::TransformError;

/// Radius of the ROC boundary described by `text`.
///
/// For the `max(...)` form this is the largest listed value.
pub fn parse_roc(text: &str) -> Result<f64, TransformError> {
    let malformed = |reason: &str| TransformError::malformed_roc(text, reason);

    let (lhs, rhs) = text
        .split_once('>')
        .ok_or_else(|| malformed("expected the form '|z| > radius'"))?;
    if lhs.trim() != "|z|" {
        return Err(malformed("left-hand side must be '|z|'"));
    }
    if rhs.contains('>') {
        return Err(malformed("more than one '>'"));
    }

    let rhs = rhs.trim();
    let Some(rest) = rhs.strip_prefix("max") else {
        return parse_radius(text, rhs);
    };

    let inner = rest
        .trim_start()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| malformed("expected 'max(r1, r2, ...)'"))?;

    let mut radius = f64::NEG_INFINITY;
    for piece in inner.split(',') {
        radius = radius.max(parse_radius(text, piece)?);
    }
    Ok(radius)
}

fn parse_radius(text: &str, piece: &str) -> Result<f64, TransformError> {
    let piece = piece.trim();
    if piece.is_empty() {
        return Err(TransformError::malformed_roc(text, "empty radius value"));
    }
    let value: f64 = piece
        .parse()
        .map_err(|_| TransformError::malformed_roc(text, format!("'{piece}' is not a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(TransformError::malformed_roc(
            text,
            format!("radius must be finite and non-negative, got '{piece}'"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Roc;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn parses_single_radius() {
        assert_eq!(parse_roc("|z| > 3").unwrap(), 3.0);
        assert_eq!(parse_roc("  |z|>0.5 ").unwrap(), 0.5);
    }

    #[test]
    fn parses_max_form() {
        assert_eq!(parse_roc("|z| > max(2, 3)").unwrap(), 3.0);
        assert_eq!(parse_roc("|z| > max(3, 3)").unwrap(), 3.0);
        assert_eq!(parse_roc("|z| > max (4.5,1)").unwrap(), 4.5);
    }

    #[test]
    fn is_a_left_inverse_of_roc_display() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let r1: f64 = rng.gen_range(0.0..100.0);
            let r2: f64 = rng.gen_range(0.0..100.0);

            let single = Roc::Exterior { radius: r1 };
            assert_eq!(parse_roc(&single.to_string()).unwrap(), r1);

            let max = Roc::ExteriorOfMax { r1, r2 };
            assert_eq!(parse_roc(&max.to_string()).unwrap(), r1.max(r2));
        }
    }

    #[test]
    fn rejects_malformed_descriptions() {
        for bad in [
            "",
            "|z| < 3",
            "z > 3",
            "|z| > ",
            "|z| > three",
            "|z| > max(2, )",
            "|z| > max(2, 3",
            "|z| > max()",
            "|z| > -1",
            "|z| > inf",
            "|z| > 1 > 2",
        ] {
            let err = parse_roc(bad).unwrap_err();
            assert!(
                matches!(&err, TransformError::MalformedRoc { text, .. } if text == bad),
                "{bad:?} -> {err:?}"
            );
        }
    }
}
