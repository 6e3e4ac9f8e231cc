//! Closed-form transform expressions.
//!
//! Only the three shapes produced by the builder exist, so the "expression" is
//! an enum rather than a general expression tree. Each shape knows how to:
//! - evaluate itself at a complex `z`
//! - report its poles
//! - print itself in the usual algebraic notation

use std::fmt;

use num_complex::Complex64;

use crate::domain::types::fmt_num;

/// A denominator whose modulus falls at or below this is treated as zero.
pub const SINGULAR_EPS: f64 = 1e-12;

/// A Z-transform `X(z)` in closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// `z / (z - a)`
    SinglePole { a: Complex64 },
    /// `z / (z - a1) + z / (z - a2)`, kept as two additive terms.
    PoleSum { a1: Complex64, a2: Complex64 },
    /// `z sin(w) / (z^2 - 2 z cos(w) + 1)`
    Sinusoid { w: f64 },
}

impl Transform {
    /// Evaluate `X(z)` without any singularity checks.
    ///
    /// At a pole the result is whatever IEEE division produces (inf/NaN).
    pub fn eval(&self, z: Complex64) -> Complex64 {
        match *self {
            Transform::SinglePole { a } => z / (z - a),
            Transform::PoleSum { a1, a2 } => z / (z - a1) + z / (z - a2),
            Transform::Sinusoid { w } => z * w.sin() / sinusoid_denominator(z, w),
        }
    }

    /// Evaluate `X(z)`, returning `None` when `z` sits on a pole.
    pub fn try_eval(&self, z: Complex64) -> Option<Complex64> {
        let near_pole = match *self {
            Transform::SinglePole { a } => is_zero(z - a),
            Transform::PoleSum { a1, a2 } => is_zero(z - a1) || is_zero(z - a2),
            Transform::Sinusoid { w } => is_zero(sinusoid_denominator(z, w)),
        };
        if near_pole {
            return None;
        }
        let value = self.eval(z);
        (value.re.is_finite() && value.im.is_finite()).then_some(value)
    }

    /// Poles in term order (`e^{+iw}` before `e^{-iw}` for the sinusoid).
    pub fn poles(&self) -> Vec<Complex64> {
        match *self {
            Transform::SinglePole { a } => vec![a],
            Transform::PoleSum { a1, a2 } => vec![a1, a2],
            Transform::Sinusoid { w } => vec![Complex64::from_polar(1.0, w), Complex64::from_polar(1.0, -w)],
        }
    }

    /// Largest pole modulus (the ROC boundary of a causal transform).
    pub fn max_pole_modulus(&self) -> f64 {
        self.poles().iter().map(|p| p.norm()).fold(0.0, f64::max)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::SinglePole { a } => write!(f, "z/{}", shifted(a)),
            Transform::PoleSum { a1, a2 } => write!(f, "z/{} + z/{}", shifted(a1), shifted(a2)),
            Transform::Sinusoid { w } => {
                let two_cos = 2.0 * w.cos();
                let middle = if two_cos < 0.0 {
                    format!("+ {}", fmt_num(-two_cos))
                } else {
                    format!("- {}", fmt_num(two_cos))
                };
                write!(f, "{}*z/(z^2 {middle}*z + 1)", fmt_num(w.sin()))
            }
        }
    }
}

fn sinusoid_denominator(z: Complex64, w: f64) -> Complex64 {
    z * z - z * (2.0 * w.cos()) + 1.0
}

fn is_zero(d: Complex64) -> bool {
    d.norm() <= SINGULAR_EPS
}

/// `(z - a)` with the sign folded in for real poles.
fn shifted(a: Complex64) -> String {
    if a.im != 0.0 {
        return format!("(z - ({a}))");
    }
    if a.re < 0.0 {
        format!("(z + {})", fmt_num(-a.re))
    } else {
        format!("(z - {})", fmt_num(a.re))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn real(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    #[test]
    fn prints_in_algebraic_notation() {
        assert_eq!(Transform::SinglePole { a: real(3.0) }.to_string(), "z/(z - 3)");
        assert_eq!(Transform::SinglePole { a: real(-0.5) }.to_string(), "z/(z + 0.5)");
        assert_eq!(Transform::SinglePole { a: real(-0.0) }.to_string(), "z/(z - 0)");
        assert_eq!(
            Transform::PoleSum {
                a1: real(2.0),
                a2: real(3.0)
            }
            .to_string(),
            "z/(z - 2) + z/(z - 3)"
        );
        assert_eq!(
            Transform::Sinusoid { w: FRAC_PI_4 }.to_string(),
            format!("{}*z/(z^2 - {}*z + 1)", FRAC_PI_4.sin(), 2.0 * FRAC_PI_4.cos())
        );
        assert_eq!(
            Transform::SinglePole { a: Complex64::new(0.0, 1.0) }.to_string(),
            "z/(z - (0+1i))"
        );
    }

    #[test]
    fn sinusoid_with_obtuse_frequency_flips_the_middle_sign() {
        let text = Transform::Sinusoid { w: 3.0 * FRAC_PI_4 }.to_string();
        assert!(text.contains("z^2 + 1.41421356"), "{text}");
    }

    #[test]
    fn try_eval_rejects_points_on_a_pole() {
        let t = Transform::SinglePole { a: real(1.0) };
        assert!(t.try_eval(real(1.0)).is_none());
        assert!(t.try_eval(real(-1.0)).is_some());

        let s = Transform::Sinusoid { w: FRAC_PI_4 };
        assert!(s.try_eval(Complex64::from_polar(1.0, FRAC_PI_4)).is_none());
        assert!(s.try_eval(Complex64::from_polar(1.0, -FRAC_PI_4)).is_none());
        assert!(s.try_eval(real(2.0)).is_some());
    }

    #[test]
    fn sinusoid_poles_sit_on_the_unit_circle() {
        let s = Transform::Sinusoid { w: 0.3 };
        for p in s.poles() {
            assert!((p.norm() - 1.0).abs() < 1e-12);
            assert!(s.try_eval(p).is_none());
        }
        assert!((s.max_pole_modulus() - 1.0).abs() < 1e-12);
    }
}
