//! Easing curve formulas
//!
//! One free function per curve, mapping normalized progress to eased output.
//! Inputs are never clamped: values outside `[0, 1]` are evaluated as written
//! and NaN/infinite results propagate.
//!
//! Curves built on `sin`, `cos`, `sqrt` or `2^x` compute in f64 internally and
//! round once on return. Polynomial, back and bounce curves stay in f32.

use std::f64::consts::PI;

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;

const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;

const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

#[inline]
pub fn linear(x: f32) -> f32 {
    x
}

// ============================================================================
// Sine
// ============================================================================

/// `1 - cos(x·π) / 2`
pub fn ease_in_sine(x: f32) -> f32 {
    let x = x as f64;
    (1.0 - (x * PI).cos() / 2.0) as f32
}

/// `1 - sin(x·π) / 2`
pub fn ease_out_sine(x: f32) -> f32 {
    let x = x as f64;
    (1.0 - (x * PI).sin() / 2.0) as f32
}

pub fn ease_in_out_sine(x: f32) -> f32 {
    let x = x as f64;
    (-((PI * x).cos() - 1.0) / 2.0) as f32
}

// ============================================================================
// Polynomial
// ============================================================================

pub fn ease_in_quad(x: f32) -> f32 {
    x * x
}

pub fn ease_out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}

pub fn ease_in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

pub fn ease_in_cubic(x: f32) -> f32 {
    x * x * x
}

pub fn ease_out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

pub fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

pub fn ease_in_quart(x: f32) -> f32 {
    x * x * x * x
}

pub fn ease_out_quart(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(4)
}

pub fn ease_in_out_quart(x: f32) -> f32 {
    if x < 0.5 {
        8.0 * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
    }
}

pub fn ease_in_quint(x: f32) -> f32 {
    x.powi(5)
}

pub fn ease_out_quint(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(5)
}

pub fn ease_in_out_quint(x: f32) -> f32 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

// ============================================================================
// Exponential
// ============================================================================

/// Exactly 0 at `x == 0`, `2^(10x - 10)` elsewhere.
pub fn ease_in_expo(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    let x = x as f64;
    2f64.powf(10.0 * x - 10.0) as f32
}

/// Exactly 1 at `x == 1`, `1 - 2^(-10x)` elsewhere.
pub fn ease_out_expo(x: f32) -> f32 {
    if x == 1.0 {
        return 1.0;
    }
    let x = x as f64;
    (1.0 - 2f64.powf(-10.0 * x)) as f32
}

pub fn ease_in_out_expo(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    let x = x as f64;
    let y = if x < 0.5 {
        2f64.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
    };
    y as f32
}

// ============================================================================
// Circular
// ============================================================================

pub fn ease_in_circ(x: f32) -> f32 {
    let x = x as f64;
    (1.0 - (1.0 - x.powi(2)).sqrt()) as f32
}

pub fn ease_out_circ(x: f32) -> f32 {
    let x = x as f64;
    (1.0 - (x - 1.0).powi(2)).sqrt() as f32
}

pub fn ease_in_out_circ(x: f32) -> f32 {
    let x = x as f64;
    let y = if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    };
    y as f32
}

// ============================================================================
// Back (overshoots)
// ============================================================================

pub fn ease_in_back(x: f32) -> f32 {
    BACK_C3 * x * x * x - BACK_C1 * x * x
}

pub fn ease_out_back(x: f32) -> f32 {
    let t = x - 1.0;
    1.0 + BACK_C3 * t.powi(3) + BACK_C1 * t.powi(2)
}

pub fn ease_in_out_back(x: f32) -> f32 {
    if x < 0.5 {
        ((2.0 * x).powi(2) * ((BACK_C2 + 1.0) * 2.0 * x - BACK_C2)) / 2.0
    } else {
        let t = 2.0 * x - 2.0;
        (t.powi(2) * ((BACK_C2 + 1.0) * t + BACK_C2) + 2.0) / 2.0
    }
}

// ============================================================================
// Elastic (overshoots)
// ============================================================================

pub fn ease_in_elastic(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    let x = x as f64;
    (-(2f64.powf(10.0 * x - 10.0)) * ((10.0 * x - 10.75) * ELASTIC_C4).sin()) as f32
}

pub fn ease_out_elastic(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    let x = x as f64;
    (2f64.powf(-10.0 * x) * ((10.0 * x - 0.75) * ELASTIC_C4).sin() + 1.0) as f32
}

pub fn ease_in_out_elastic(x: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    let x = x as f64;
    let sin = ((20.0 * x - 11.125) * ELASTIC_C5).sin();
    let y = if x < 0.5 {
        -(2f64.powf(20.0 * x - 10.0) * sin) / 2.0
    } else {
        (2f64.powf(-20.0 * x + 10.0) * sin) / 2.0 + 1.0
    };
    y as f32
}

// ============================================================================
// Bounce
// ============================================================================

/// Piecewise parabolic bounce settling at 1.
///
/// Thresholds are strict and checked in order. Each later segment shifts `x`
/// first and squares the shifted value.
pub fn ease_out_bounce(x: f32) -> f32 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let t = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let t = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Mirror of [`ease_out_bounce`].
pub fn ease_in_bounce(x: f32) -> f32 {
    1.0 - ease_out_bounce(1.0 - x)
}

pub fn ease_in_out_bounce(x: f32) -> f32 {
    if x < 0.5 {
        (1.0 - ease_out_bounce(1.0 - 2.0 * x)) / 2.0
    } else {
        (1.0 + ease_out_bounce(2.0 * x - 1.0)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sine_keeps_half_cosine_shape() {
        // In/out sine are not normalized to [0, 1]
        assert_close(ease_in_sine(0.0), 0.5);
        assert_close(ease_in_sine(1.0), 1.5);
        assert_close(ease_out_sine(0.0), 1.0);
        assert_close(ease_out_sine(0.5), 0.5);
        assert_close(ease_in_out_sine(0.5), 0.5);
    }

    #[test]
    fn test_polynomial_midpoints() {
        assert_eq!(ease_in_quad(0.5), 0.25);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_in_cubic(0.5), 0.125);
        assert_eq!(ease_in_quart(0.5), 0.0625);
        assert_eq!(ease_in_quint(0.5), 0.03125);
        assert_close(ease_in_out_quad(0.25), 0.125);
        assert_close(ease_in_out_cubic(0.25), 0.0625);
        assert_close(ease_in_out_quart(0.75), 0.96875);
        assert_close(ease_in_out_quint(0.75), 0.984375);
    }

    #[test]
    fn test_expo_endpoints_take_explicit_branch() {
        assert_eq!(ease_in_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_in_out_expo(0.0), 0.0);
        assert_eq!(ease_in_out_expo(1.0), 1.0);

        // General formula would give 2^-10 at zero
        assert_close(ease_in_expo(1.0), 1.0);
        assert_close(ease_out_expo(0.0), 0.0);
        assert_close(ease_in_out_expo(0.5), 0.5);
    }

    #[test]
    fn test_back_overshoots() {
        assert!(ease_in_back(0.2) < 0.0);
        assert!(ease_out_back(0.8) > 1.0);
        assert_close(ease_in_back(1.0), 1.0);
        assert_close(ease_out_back(0.0), 0.0);
    }

    #[test]
    fn test_in_out_back_midpoint_uses_upper_branch() {
        let t = 2.0 * 0.5_f32 - 2.0;
        let expected = (t * t * ((BACK_C2 + 1.0) * t + BACK_C2) + 2.0) / 2.0;
        assert_close(ease_in_out_back(0.5), expected);
        assert_close(ease_in_out_back(0.5), 0.5);
    }

    #[test]
    fn test_elastic_endpoints() {
        for f in [ease_in_elastic, ease_out_elastic, ease_in_out_elastic] {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
        }
        assert!(ease_out_elastic(0.1) > 1.0);
    }

    #[test]
    fn test_bounce_out_segments() {
        // First segment
        assert_close(ease_out_bounce(0.2), 0.3025);
        // Second segment: shifted by 1.5/d1 before squaring
        assert_close(ease_out_bounce(0.5), 0.765625);
        // Third segment
        assert_close(ease_out_bounce(2.25 / BOUNCE_D1), 0.9375);
        // Last segment
        assert_close(ease_out_bounce(2.625 / BOUNCE_D1), 0.984375);
        assert_close(ease_out_bounce(1.0), 1.0);
    }

    #[test]
    fn test_bounce_in_mirrors_out() {
        for x in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            assert_eq!(ease_in_bounce(x), 1.0 - ease_out_bounce(1.0 - x));
        }
    }

    #[test]
    fn test_no_clamping() {
        assert_eq!(ease_in_quad(2.0), 4.0);
        assert_eq!(linear(-3.0), -3.0);
        assert!(ease_in_circ(2.0).is_nan());
        assert!(ease_out_circ(-1.0).is_nan());
        assert!(ease_in_quad(f32::NAN).is_nan());
        assert!(ease_out_bounce(f32::NAN).is_nan());
    }
}
