//! Floored ("Euclidean") modular arithmetic for the quotient spaces of the crate: the 12 chromatic
//! classes, the 7 diatonic degrees, and the octave of log-frequency space.

use std::f64::consts::LN_2;

use num_integer::Integer;

/// `x mod 12`, always in `0..12`.
pub fn mod12(x: i64) -> i64 {
    x.mod_floor(&12)
}

/// Addition of two values that are already reduced modulo 12.
pub fn add_mod12(l: i64, r: i64) -> i64 {
    let x = mod12(l) + mod12(r);
    if x >= 12 {
        x - 12
    } else {
        x
    }
}

/// Subtraction of two values that are already reduced modulo 12.
pub fn sub_mod12(l: i64, r: i64) -> i64 {
    let a = mod12(l);
    let b = mod12(r);
    if a >= b {
        a - b
    } else {
        12 - b + a
    }
}

/// `x mod 7`, always in `0..7`.
pub fn mod7(x: i64) -> i64 {
    x.mod_floor(&7)
}

/// `floor(x / 7)`.
pub fn div7(x: i64) -> i64 {
    x.div_floor(&7)
}

/// Reduce a log-frequency ratio into `[0, ln 2)`.
///
/// [f64::rem_euclid] may round up to exactly `ln 2` for tiny negative inputs; that case is folded
/// back onto `0`.
pub fn mod_octave(x: f64) -> f64 {
    let r = x.rem_euclid(LN_2);
    if r >= LN_2 {
        0.0
    } else {
        r
    }
}

/// The distance of two log-frequency ratios on the octave circle, in `[0, ln 2 / 2]`.
pub fn octave_circle_distance(l: f64, r: f64) -> f64 {
    let d = mod_octave(l - r);
    d.min(LN_2 - d)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mod12() {
        assert_eq!(mod12(-1), 11);
        assert_eq!(mod12(12), 0);
        assert_eq!(mod12(-25), 11);
        assert_eq!(add_mod12(7, 7), 2);
        assert_eq!(add_mod12(-1, 1), 0);
        assert_eq!(sub_mod12(2, 7), 7);
        assert_eq!(sub_mod12(7, 2), 5);
    }

    #[test]
    fn test_mod7() {
        assert_eq!(mod7(-4 * 4), 5);
        assert_eq!(div7(-8), -2);
        assert_eq!(div7(8), 1);
        assert_eq!(div7(-7), -1);
    }

    #[test]
    fn test_mod_octave() {
        assert_abs_diff_eq!(mod_octave(3.0 * LN_2 + 0.1), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(mod_octave(-0.1), LN_2 - 0.1, epsilon = 1e-12);
        assert!(mod_octave(-1e-300) < LN_2);
        assert_abs_diff_eq!(octave_circle_distance(0.01, LN_2 - 0.01), 0.02, epsilon = 1e-12);
    }
}
