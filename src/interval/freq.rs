//! Frequency ratios and frequencies, with and without octave equivalence.
//!
//! Values are stored as natural logarithms, so that composing ratios (multiplication) becomes
//! addition. Everything is printed as non-log values; classes are printed in brackets to show that
//! they are representatives of an equivalence class.
//!
//! Because of rounding, exact equality is rarely what you want here. Use [approx::AbsDiffEq] (or
//! the `approx_eq` convenience methods) with [FREQ_EPSILON] as the default tolerance.

use std::{f64::consts::LN_2, fmt, ops};

use approx::AbsDiffEq;
use num_rational::Ratio;
use num_traits::Zero;

use crate::{
    error::PitchErr,
    interval::r#trait::{impl_scalar_mul, Interval, IntervalClass, ToClass},
    pitch::Pitch,
    util::modular::{mod_octave, octave_circle_distance},
};

/// The default tolerance of approximate equality, as an absolute difference of log values.
pub const FREQ_EPSILON: f64 = 1e-9;

/// A frequency ratio, stored as its natural logarithm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FreqInterval(f64);

/// A frequency ratio modulo the octave, stored as its natural logarithm in `[0, ln 2)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FreqIC(f64);

fn checked_log(x: f64) -> Result<f64, PitchErr> {
    if x.is_finite() && x > 0.0 {
        Ok(x.ln())
    } else {
        Err(PitchErr::InvalidRatio(x))
    }
}

/// Logs have to be finite; `-inf` would be the ratio 0.
fn finite_log(x: f64) -> Result<f64, PitchErr> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(PitchErr::InvalidRatio(x.exp()))
    }
}

impl FreqInterval {
    /// `log_ratio` must be finite. Use [try_from_log][FreqInterval::try_from_log] for unchecked
    /// input.
    pub fn from_log(log_ratio: f64) -> Self {
        FreqInterval(log_ratio)
    }

    pub fn try_from_log(log_ratio: f64) -> Result<Self, PitchErr> {
        Ok(FreqInterval(finite_log(log_ratio)?))
    }

    pub fn from_ratio(ratio: f64) -> Result<Self, PitchErr> {
        Ok(FreqInterval(checked_log(ratio)?))
    }

    /// An exact rational ratio like `3/2`.
    pub fn from_rational(ratio: Ratio<i64>) -> Result<Self, PitchErr> {
        let (n, d) = ratio.into_raw();
        Self::from_ratio(n as f64 / d as f64)
    }

    pub fn log_ratio(&self) -> f64 {
        self.0
    }

    pub fn ratio(&self) -> f64 {
        self.0.exp()
    }

    /// Approximate equality with the default tolerance [FREQ_EPSILON].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, FREQ_EPSILON)
    }
}

impl FreqIC {
    /// `log_ratio` must be finite. Use [try_from_log][FreqIC::try_from_log] for unchecked input.
    pub fn from_log(log_ratio: f64) -> Self {
        FreqIC(mod_octave(log_ratio))
    }

    pub fn try_from_log(log_ratio: f64) -> Result<Self, PitchErr> {
        Ok(FreqIC(mod_octave(finite_log(log_ratio)?)))
    }

    pub fn from_ratio(ratio: f64) -> Result<Self, PitchErr> {
        Ok(FreqIC(mod_octave(checked_log(ratio)?)))
    }

    /// The representative in `[0, ln 2)`.
    pub fn log_ratio(&self) -> f64 {
        self.0
    }

    /// The representative ratio in `[1, 2)`.
    pub fn ratio(&self) -> f64 {
        self.0.exp()
    }

    /// Approximate equality with the default tolerance [FREQ_EPSILON].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, FREQ_EPSILON)
    }
}

/// A frequency ratio interval.
pub fn freqi(ratio: f64) -> Result<FreqInterval, PitchErr> {
    FreqInterval::from_ratio(ratio)
}

/// A frequency ratio interval from a log ratio.
pub fn logfreqi(log_ratio: f64) -> Result<FreqInterval, PitchErr> {
    FreqInterval::try_from_log(log_ratio)
}

/// A frequency ratio interval class.
pub fn freqic(ratio: f64) -> Result<FreqIC, PitchErr> {
    FreqIC::from_ratio(ratio)
}

/// A frequency ratio interval class from a log ratio.
pub fn logfreqic(log_ratio: f64) -> Result<FreqIC, PitchErr> {
    FreqIC::try_from_log(log_ratio)
}

/// A frequency pitch from a frequency in Hz.
pub fn freqp(hz: f64) -> Result<Pitch<FreqInterval>, PitchErr> {
    Ok(Pitch::from_interval(freqi(hz)?))
}

/// A frequency pitch from the log of a frequency in Hz.
pub fn logfreqp(log_hz: f64) -> Result<Pitch<FreqInterval>, PitchErr> {
    Ok(Pitch::from_interval(logfreqi(log_hz)?))
}

/// A frequency pitch class from a frequency in Hz.
pub fn freqpc(hz: f64) -> Result<Pitch<FreqIC>, PitchErr> {
    Ok(Pitch::from_interval(freqic(hz)?))
}

/// A frequency pitch class from the log of a frequency in Hz.
pub fn logfreqpc(log_hz: f64) -> Result<Pitch<FreqIC>, PitchErr> {
    Ok(Pitch::from_interval(logfreqic(log_hz)?))
}

impl ops::Add for FreqInterval {
    type Output = Self;
    fn add(self, x: Self) -> Self {
        FreqInterval(self.0 + x.0)
    }
}

impl ops::Sub for FreqInterval {
    type Output = Self;
    fn sub(self, x: Self) -> Self {
        FreqInterval(self.0 - x.0)
    }
}

impl ops::Neg for FreqInterval {
    type Output = Self;
    fn neg(self) -> Self {
        FreqInterval(-self.0)
    }
}

impl ops::Mul<i64> for FreqInterval {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        FreqInterval(self.0 * n as f64)
    }
}

impl_scalar_mul!(FreqInterval);

impl Zero for FreqInterval {
    fn zero() -> Self {
        FreqInterval(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Interval for FreqInterval {
    fn octave() -> Self {
        FreqInterval(LN_2)
    }

    fn sign(&self) -> i8 {
        if self.0 > 0.0 {
            1
        } else if self.0 < 0.0 {
            -1
        } else {
            0
        }
    }
}

impl ToClass for FreqInterval {
    type Class = FreqIC;
    fn ic(&self) -> FreqIC {
        FreqIC::from_log(self.0)
    }
}

impl ops::Add for FreqIC {
    type Output = Self;
    fn add(self, x: Self) -> Self {
        FreqIC::from_log(self.0 + x.0)
    }
}

impl ops::Sub for FreqIC {
    type Output = Self;
    fn sub(self, x: Self) -> Self {
        FreqIC::from_log(self.0 - x.0)
    }
}

impl ops::Neg for FreqIC {
    type Output = Self;
    fn neg(self) -> Self {
        FreqIC::from_log(-self.0)
    }
}

impl ops::Mul<i64> for FreqIC {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        FreqIC::from_log(self.0 * n as f64)
    }
}

impl_scalar_mul!(FreqIC);

impl Zero for FreqIC {
    fn zero() -> Self {
        FreqIC(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Interval for FreqIC {
    fn octave() -> Self {
        FreqIC(0.0)
    }

    /// Classes up to and including half an octave are upward, the others downward.
    fn sign(&self) -> i8 {
        if self.0 == 0.0 {
            0
        } else if self.0 <= LN_2 / 2.0 {
            1
        } else {
            -1
        }
    }
}

impl IntervalClass for FreqIC {
    type Instance = FreqInterval;

    /// The representative in `[1, 2)`, plus `octaves` octaves.
    fn embed(&self, octaves: i64) -> FreqInterval {
        FreqInterval(self.0 + LN_2 * octaves as f64)
    }
}

impl AbsDiffEq for FreqInterval {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        FREQ_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }
}

/// Compares on the octave circle, so representatives just above `0` and just below `ln 2` are
/// close to each other.
impl AbsDiffEq for FreqIC {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        FREQ_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        octave_circle_distance(self.0, other.0) <= epsilon
    }
}

impl<I: AbsDiffEq> AbsDiffEq for Pitch<I>
where
    I: Copy,
    I::Epsilon: Copy,
{
    type Epsilon = I::Epsilon;

    fn default_epsilon() -> I::Epsilon {
        I::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: I::Epsilon) -> bool {
        self.to_interval()
            .abs_diff_eq(&other.to_interval(), epsilon)
    }
}

impl Pitch<FreqInterval> {
    /// The frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.to_interval().ratio()
    }

    /// Approximate equality with the default tolerance [FREQ_EPSILON].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, FREQ_EPSILON)
    }
}

impl Pitch<FreqIC> {
    /// The representative frequency in `[1, 2)` Hz.
    pub fn frequency(&self) -> f64 {
        self.to_interval().ratio()
    }

    /// Approximate equality with the default tolerance [FREQ_EPSILON].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, FREQ_EPSILON)
    }
}

impl fmt::Display for FreqInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fr{}", self.ratio())
    }
}

impl fmt::Display for FreqIC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fr[{}]", self.ratio())
    }
}

impl fmt::Display for Pitch<FreqInterval> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}Hz", self.frequency())
    }
}

impl fmt::Display for Pitch<FreqIC> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]Hz", self.frequency())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    #[test]
    fn test_constructors() {
        assert_abs_diff_eq!(freqi(1.5).unwrap().ratio(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            logfreqi((1.5f64).ln()).unwrap(),
            freqi(1.5).unwrap(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            FreqInterval::from_rational(Ratio::new(3, 2)).unwrap(),
            freqi(1.5).unwrap()
        );
        assert_abs_diff_eq!(freqic(3.0).unwrap().ratio(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(freqpc(441.0).unwrap().frequency(), 441.0 / 256.0, epsilon = 1e-9);
        assert_eq!(freqi(0.0), Err(PitchErr::InvalidRatio(0.0)));
        assert_eq!(freqp(-440.0), Err(PitchErr::InvalidRatio(-440.0)));
        assert!(freqi(f64::NAN).is_err());
        assert!(freqi(f64::INFINITY).is_err());
        assert!(logfreqi(f64::NAN).is_err());
        assert!(logfreqic(f64::INFINITY).is_err());
        assert!(logfreqp(f64::NEG_INFINITY).is_err());
        assert!(logfreqpc(f64::NAN).is_err());
        assert!(FreqIC::try_from_log(f64::NAN).is_err());
        assert_abs_diff_eq!(FreqIC::try_from_log(-LN_2).unwrap(), FreqIC::unison());
    }

    #[test]
    fn test_approximate_equality() {
        let a = freqp(220.0).unwrap() + freqi(2.0).unwrap();
        let b = freqp(440.0).unwrap();
        assert!(a.approx_eq(&b));
        assert_abs_diff_eq!(a, b);
        assert_abs_diff_ne!(a, freqp(440.1).unwrap());

        // values on both ends of the octave are neighbours
        assert!(logfreqic(1e-12).unwrap().approx_eq(&logfreqic(LN_2 - 1e-12).unwrap()));
        assert!(!logfreqic(0.1).unwrap().approx_eq(&logfreqic(LN_2 - 0.1).unwrap()));
    }

    #[test]
    fn test_module_laws() {
        let xs = [0.0, 0.3, -1.2, 2.5, LN_2].map(|x| logfreqi(x).unwrap());
        for a in xs {
            assert_abs_diff_eq!(a + FreqInterval::unison(), a);
            assert_abs_diff_eq!(a + (-a), FreqInterval::unison());
            assert_abs_diff_eq!(a.scale(3), a + a + a);
            assert!(a.abs().sign() >= 0);
            for b in xs {
                assert_abs_diff_eq!(a + b, b + a);
                assert_abs_diff_eq!((a + b).ic(), a.ic() + b.ic());
                for c in xs {
                    assert_abs_diff_eq!((a + b) + c, a + (b + c));
                }
            }
            assert_abs_diff_eq!(a.ic().embed(0).ic(), a.ic());
            assert_abs_diff_eq!(a.ic().embed(2), a.ic().embed(0) + FreqInterval::n_octaves(2));
        }
    }

    #[test]
    fn test_classes() {
        let fifth = freqi(1.5).unwrap();
        assert_abs_diff_eq!((fifth + FreqInterval::octave()).ic(), fifth.ic());
        assert!(fifth.ic().log_ratio() < LN_2);
        assert!(logfreqic(-0.1).unwrap().log_ratio() >= 0.0);
        assert_eq!(FreqIC::octave(), FreqIC::unison());
        assert_abs_diff_eq!(freqic(1.5).unwrap().embed(1).ratio(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(-freqic(1.5).unwrap(), freqic(4.0 / 3.0).unwrap());
    }

    #[test]
    fn test_sign() {
        assert_eq!(freqi(0.5).unwrap().sign(), -1);
        assert_eq!(freqi(1.0).unwrap().sign(), 0);
        assert_eq!(freqic(4.0 / 3.0).unwrap().sign(), 1);
        assert_eq!(freqic(1.5).unwrap().sign(), -1);
        assert_eq!(logfreqic(LN_2 / 2.0).unwrap().sign(), 1);
        assert_abs_diff_eq!(freqic(1.5).unwrap().abs(), freqic(4.0 / 3.0).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(logfreqi(0.0).unwrap().to_string(), "fr1");
        assert_eq!(logfreqic(0.0).unwrap().to_string(), "fr[1]");
        assert_eq!(logfreqp(0.0).unwrap().to_string(), "1Hz");
        assert_eq!(logfreqpc(LN_2).unwrap().to_string(), "[1]Hz");
    }
}
