//! Spelled intervals and interval classes, as used in Western notation.
//!
//! Unlike MIDI intervals, spelled intervals distinguish enharmonically equivalent intervals such
//! as a minor third (`m3`) and an augmented second (`a2`).
//!
//! Internally, an interval is a pair of fifths and octaves. Both dimensions are logically
//! dependent: a major second up is two fifths up and one octave down, so [spelled]`(2, -1)` is
//! `M2+0`. This representation makes arithmetic component-wise, but the "internal" octave does
//! not correspond to the octave number in the notation, where the class (`M2`) and the octave
//! (`+0`) are independent. Use [Spelled::octaves] for the notated octave and
//! [Spelled::internal_octaves] for the stored one.

use std::{cmp::Ordering, ops};

use num_traits::Zero;

use crate::{
    error::PitchErr,
    interval::r#trait::{
        impl_scalar_mul, Chromatic, Interval, IntervalClass, Stepwise, ToClass,
    },
    pitch::Pitch,
    util::modular::{div7, mod7},
};

/// Largest absolute value of a component accepted by the checked constructors and the parser.
/// Derived quantities multiply components by at most 12, so they stay well inside `i64`.
pub const SPELLED_BOUND: i64 = 1 << 48;

/// The number of fifths of the perfect or major interval (or natural pitch) for each scale degree
/// `0..7`, i.e. `C D E F G A B` on the line of fifths.
pub(crate) const NATURAL_FIFTHS: [i64; 7] = [0, 2, 4, -1, 1, 3, 5];

/// Letters of the scale degrees `0..7`.
pub(crate) const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// The position on the line of fifths of the interval (or pitch class) with the given scale
/// degree and alteration.
pub(crate) fn fifths_from_degree(degree: usize, alteration: i64) -> i64 {
    NATURAL_FIFTHS[degree % 7] + 7 * alteration
}

/// The scale degree `0..7` that a position on the line of fifths points to.
fn degree_of_fifths(fifths: i64) -> i64 {
    mod7(mod7(fifths) * 4)
}

fn check_bound(x: i64, what: &'static str) -> Result<i64, PitchErr> {
    if !(-SPELLED_BOUND..=SPELLED_BOUND).contains(&x) {
        Err(PitchErr::NumericOverflow(what))
    } else {
        Ok(x)
    }
}

/// A spelled interval, as a number of fifths and (dependent) octaves.
///
/// For example, `SpelledInterval::new(-3, 2)` is a minor third upwards: three fifths down and two
/// octaves up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpelledInterval {
    fifths: i64,
    octaves: i64,
}

/// A spelled interval class, as a position on the line of fifths.
///
/// For example, `SpelledIC::new(3)` is a major sixth upwards or a minor third downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpelledIC {
    fifths: i64,
}

impl SpelledInterval {
    /// Doesn't check [SPELLED_BOUND]. Derived quantities like [Spelled::diasteps] may overflow
    /// for components beyond it.
    pub fn new(fifths: i64, octaves: i64) -> Self {
        SpelledInterval { fifths, octaves }
    }

    /// Like [new][SpelledInterval::new], but rejects components beyond [SPELLED_BOUND].
    pub fn try_new(fifths: i64, octaves: i64) -> Result<Self, PitchErr> {
        Ok(SpelledInterval {
            fifths: check_bound(fifths, "spelled interval fifths")?,
            octaves: check_bound(octaves, "spelled interval octaves")?,
        })
    }

    /// The interval with the given class (in fifths) whose notated octave is `octaves`.
    pub(crate) fn from_notated(fifths: i64, octaves: i64) -> Self {
        SpelledInterval {
            fifths,
            octaves: octaves - div7(fifths * 4),
        }
    }
}

impl SpelledIC {
    /// Doesn't check [SPELLED_BOUND].
    pub fn new(fifths: i64) -> Self {
        SpelledIC { fifths }
    }

    /// Like [new][SpelledIC::new], but rejects values beyond [SPELLED_BOUND].
    pub fn try_new(fifths: i64) -> Result<Self, PitchErr> {
        Ok(SpelledIC {
            fifths: check_bound(fifths, "spelled interval class fifths")?,
        })
    }
}

/// A spelled interval from fifths and (internal) octaves, both within [SPELLED_BOUND].
pub fn spelled(fifths: i64, octaves: i64) -> Result<SpelledInterval, PitchErr> {
    SpelledInterval::try_new(fifths, octaves)
}

/// A spelled interval class going `fifths` fifths upwards.
pub fn sic(fifths: i64) -> Result<SpelledIC, PitchErr> {
    SpelledIC::try_new(fifths)
}

/// A spelled pitch from fifths and (internal) octaves above `C0`.
pub fn spelledp(fifths: i64, octaves: i64) -> Result<Pitch<SpelledInterval>, PitchErr> {
    Ok(Pitch::from_interval(spelled(fifths, octaves)?))
}

/// A spelled pitch class, as a position on the line of fifths (`C` = 0, `G` = 1, `F` = -1).
pub fn spc(fifths: i64) -> Result<Pitch<SpelledIC>, PitchErr> {
    Ok(Pitch::from_interval(sic(fifths)?))
}

/// The diatonic decomposition of spelled intervals and interval classes.
///
/// All degree-like quantities count from 0 (for the unison), not from 1.
pub trait Spelled {
    /// The octave-invariant part of the interval in fifths (unison = 0, fifth up = 1, fourth up =
    /// -1).
    fn fifths(&self) -> i64;

    /// The stored octaves, which depend on the fifths. Always 0 for classes.
    fn internal_octaves(&self) -> i64;

    /// The octaves as notated: upward intervals start at 0, downward intervals at -1.
    fn octaves(&self) -> i64;

    /// The scale degree `0..7` the interval points to, treating downward intervals like their
    /// upward complements (so a second down is 6).
    fn degree(&self) -> i64 {
        degree_of_fifths(self.fifths())
    }

    /// The number of diatonic steps modulo the octave, respecting the direction (second up = 1,
    /// second down = -1).
    fn generic(&self) -> i64;

    /// The total number of diatonic steps, respecting direction and octaves.
    fn diasteps(&self) -> i64;

    /// The number of semitones by which the interval is altered from its perfect or major
    /// variant. Positive values always mean augmentation, negative ones diminution.
    fn alteration(&self) -> i64;
}

impl Spelled for SpelledInterval {
    fn fifths(&self) -> i64 {
        self.fifths
    }

    fn internal_octaves(&self) -> i64 {
        self.octaves
    }

    fn octaves(&self) -> i64 {
        div7(self.diasteps())
    }

    fn generic(&self) -> i64 {
        if self.sign() < 0 {
            -degree_of_fifths(-self.fifths)
        } else {
            degree_of_fifths(self.fifths)
        }
    }

    fn diasteps(&self) -> i64 {
        self.fifths * 4 + self.octaves * 7
    }

    fn alteration(&self) -> i64 {
        div7(self.abs().fifths + 1)
    }
}

impl Spelled for SpelledIC {
    fn fifths(&self) -> i64 {
        self.fifths
    }

    fn internal_octaves(&self) -> i64 {
        0
    }

    fn octaves(&self) -> i64 {
        0
    }

    fn generic(&self) -> i64 {
        self.degree()
    }

    fn diasteps(&self) -> i64 {
        self.degree()
    }

    fn alteration(&self) -> i64 {
        div7(self.fifths + 1)
    }
}

impl ops::Add for SpelledInterval {
    type Output = Self;
    fn add(self, x: Self) -> Self {
        SpelledInterval {
            fifths: self.fifths + x.fifths,
            octaves: self.octaves + x.octaves,
        }
    }
}

impl ops::Sub for SpelledInterval {
    type Output = Self;
    fn sub(self, x: Self) -> Self {
        SpelledInterval {
            fifths: self.fifths - x.fifths,
            octaves: self.octaves - x.octaves,
        }
    }
}

impl ops::Neg for SpelledInterval {
    type Output = Self;
    fn neg(self) -> Self {
        SpelledInterval {
            fifths: -self.fifths,
            octaves: -self.octaves,
        }
    }
}

impl ops::Mul<i64> for SpelledInterval {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        SpelledInterval {
            fifths: self.fifths * n,
            octaves: self.octaves * n,
        }
    }
}

impl_scalar_mul!(SpelledInterval);

impl Zero for SpelledInterval {
    fn zero() -> Self {
        SpelledInterval::new(0, 0)
    }
    fn is_zero(&self) -> bool {
        self.fifths == 0 && self.octaves == 0
    }
}

impl Interval for SpelledInterval {
    fn octave() -> Self {
        SpelledInterval::new(0, 1)
    }

    /// The sign of the [diasteps][Spelled::diasteps]. Altered unisons are upward when augmented
    /// and downward when diminished.
    fn sign(&self) -> i8 {
        let ds = self.diasteps();
        if ds == 0 {
            self.fifths.signum() as i8
        } else {
            ds.signum() as i8
        }
    }
}

impl ToClass for SpelledInterval {
    type Class = SpelledIC;
    fn ic(&self) -> SpelledIC {
        SpelledIC::new(self.fifths)
    }
}

impl Chromatic for SpelledInterval {
    /// The augmented unison.
    fn chromsemi() -> Self {
        SpelledInterval::new(7, -4)
    }
}

impl Stepwise for SpelledInterval {
    fn is_step(&self) -> bool {
        self.diasteps().abs() <= 1
    }
}

/// Spelled intervals are ordered by their diatonic steps first, and by their alteration second.
/// This is compatible with addition: `a < b` exactly if `b - a` is upward.
impl Ord for SpelledInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.diasteps()
            .cmp(&other.diasteps())
            .then(self.fifths.cmp(&other.fifths))
    }
}

impl PartialOrd for SpelledInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ops::Add for SpelledIC {
    type Output = Self;
    fn add(self, x: Self) -> Self {
        SpelledIC::new(self.fifths + x.fifths)
    }
}

impl ops::Sub for SpelledIC {
    type Output = Self;
    fn sub(self, x: Self) -> Self {
        SpelledIC::new(self.fifths - x.fifths)
    }
}

impl ops::Neg for SpelledIC {
    type Output = Self;
    fn neg(self) -> Self {
        SpelledIC::new(-self.fifths)
    }
}

impl ops::Mul<i64> for SpelledIC {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        SpelledIC::new(self.fifths * n)
    }
}

impl_scalar_mul!(SpelledIC);

impl Zero for SpelledIC {
    fn zero() -> Self {
        SpelledIC::new(0)
    }
    fn is_zero(&self) -> bool {
        self.fifths == 0
    }
}

impl Interval for SpelledIC {
    fn octave() -> Self {
        SpelledIC::zero()
    }

    /// Classes of seconds, thirds and fourths are upward, the others downward (a fifth up is a
    /// fourth down). Altered unisons follow their alteration. There are no ties, since the
    /// diatonic circle has an odd number of degrees.
    fn sign(&self) -> i8 {
        match self.degree() {
            0 => self.fifths.signum() as i8,
            1..=3 => 1,
            _ => -1,
        }
    }
}

impl IntervalClass for SpelledIC {
    type Instance = SpelledInterval;

    /// The representative whose [notated octave][Spelled::octaves] is `octaves`.
    fn embed(&self, octaves: i64) -> SpelledInterval {
        SpelledInterval::from_notated(self.fifths, octaves)
    }
}

impl Chromatic for SpelledIC {
    fn chromsemi() -> Self {
        SpelledIC::new(7)
    }
}

impl Stepwise for SpelledIC {
    fn is_step(&self) -> bool {
        matches!(self.degree(), 0 | 1 | 6)
    }
}

/// Classes are ordered by degree, then by alteration (`P1 < a1 < d2 < m2 < M2 < ...`). This order
/// is not compatible with addition.
impl Ord for SpelledIC {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree()
            .cmp(&other.degree())
            .then(self.alteration().cmp(&other.alteration()))
    }
}

impl PartialOrd for SpelledIC {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Pitch<SpelledInterval> {
    /// The pitch class on the line of fifths.
    pub fn fifths(&self) -> i64 {
        self.to_interval().fifths
    }

    /// The octave number, as in `C4`.
    pub fn octaves(&self) -> i64 {
        self.to_interval().octaves()
    }

    pub fn internal_octaves(&self) -> i64 {
        self.to_interval().octaves
    }

    /// The scale degree of the letter (`C` = 0, `D` = 1, ...).
    pub fn degree(&self) -> i64 {
        degree_of_fifths(self.fifths())
    }

    /// The accidentals: positive for sharps, negative for flats.
    pub fn alteration(&self) -> i64 {
        div7(self.fifths() + 1)
    }

    pub fn letter(&self) -> char {
        LETTERS[self.degree() as usize]
    }
}

impl Pitch<SpelledIC> {
    /// The position on the line of fifths.
    pub fn fifths(&self) -> i64 {
        self.to_interval().fifths
    }

    pub fn degree(&self) -> i64 {
        degree_of_fifths(self.fifths())
    }

    pub fn alteration(&self) -> i64 {
        div7(self.fifths() + 1)
    }

    pub fn letter(&self) -> char {
        LETTERS[self.degree() as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval::r#trait::interval_laws::{check_class_laws, check_module_laws};
    use crate::notename::parse::{parse_interval, parse_interval_class, parse_pitch};
    use pretty_assertions::assert_eq;

    fn i(s: &str) -> SpelledInterval {
        parse_interval(s).unwrap()
    }

    fn ic(s: &str) -> SpelledIC {
        parse_interval_class(s).unwrap()
    }

    fn samples() -> Vec<SpelledInterval> {
        vec![
            spelled(0, 0).unwrap(),
            spelled(2, -1).unwrap(),
            spelled(-3, 2).unwrap(),
            spelled(7, -4).unwrap(),
            spelled(-6, 4).unwrap(),
            spelled(13, -3).unwrap(),
            spelled(-2, 1).unwrap(),
        ]
    }

    #[test]
    fn test_laws() {
        check_module_laws(&samples());
        check_module_laws(&samples().iter().map(|x| x.ic()).collect::<Vec<_>>());
        check_class_laws(&samples());
    }

    #[test]
    fn test_internal_and_notated_octaves() {
        let x = spelled(2, -1).unwrap();
        assert_eq!(x, i("M2+0"));
        assert_eq!(x.octaves(), 0);
        assert_eq!(x.internal_octaves(), -1);
        assert_eq!(i("M2+1").octaves(), 1);
        assert_eq!(i("M2-1").octaves(), -1);
        assert_eq!(i("-M2+0").octaves(), -1);
        assert_eq!(spelled(-3, 2).unwrap(), i("m3+0"));
    }

    #[test]
    fn test_diatonic_decomposition() {
        let x = i("-M3+1");
        assert_eq!(x.generic(), -2);
        assert_eq!(x.diasteps(), -9);
        assert_eq!(x.degree(), 5);
        assert_eq!(x.alteration(), 0);
        assert_eq!(x.fifths(), -4);

        assert_eq!(i("M2+0").generic(), 1);
        assert_eq!(i("-M2+0").generic(), -1);
        assert_eq!(i("-M2+0").degree(), 6);
        assert_eq!(i("P1+1").diasteps(), 7);

        let examples = [
            ("P1", 0),
            ("a1", 1),
            ("d1", -1),
            ("m2", -1),
            ("d3", -2),
            ("dd3", -3),
            ("M7", 0),
            ("a4", 1),
            ("P4", 0),
            ("d5", -1),
            ("aa6", 2),
        ];
        for (s, alt) in examples {
            assert_eq!(ic(s).alteration(), alt, "alteration of {s}");
        }
        for s in ["M3", "m6", "a4"] {
            assert_eq!(ic(s).generic(), ic(s).degree());
            assert_eq!(ic(s).diasteps(), ic(s).degree());
        }
    }

    #[test]
    fn test_sign() {
        assert_eq!(ic("P4").sign(), 1);
        assert_eq!(ic("P5").sign(), -1);
        assert_eq!(ic("P1").sign(), 0);
        assert_eq!(ic("a1").sign(), 1);
        assert_eq!(ic("d1").sign(), -1);
        assert_eq!(ic("a4").sign(), 1);
        assert_eq!(ic("d5").sign(), -1);
        assert_eq!(ic("P5").abs(), ic("P4"));

        assert_eq!(i("m3+0").sign(), 1);
        assert_eq!(i("-m3+0").sign(), -1);
        assert_eq!(i("a1+0").sign(), 1);
        assert_eq!(spelled(-7, 4).unwrap().sign(), -1);
        assert_eq!(spelled(-7, 4).unwrap(), -i("a1+0"));
        // a diminished second spans zero semitones but one diatonic step
        assert_eq!(i("d2+0").sign(), 1);
        assert_eq!(i("-P5+1").abs(), i("P5+1"));
    }

    #[test]
    fn test_ordering() {
        assert!(i("m3+0") < i("M3+0"));
        assert!(i("a2+0") < i("m3+0"));
        assert!(i("M7+0") < i("P1+1"));
        assert!(i("-M2+0") < i("P1+0"));
        assert!(parse_pitch("B3").unwrap() < parse_pitch("Cb4").unwrap());
        let mut xs = vec![ic("P5"), ic("m2"), ic("a1"), ic("P1"), ic("M2")];
        xs.sort();
        assert_eq!(xs, vec![ic("P1"), ic("a1"), ic("m2"), ic("M2"), ic("P5")]);
    }

    #[test]
    fn test_special_intervals() {
        assert_eq!(SpelledInterval::octave(), i("P1+1"));
        assert_eq!(SpelledInterval::n_octaves(3), i("P1+3"));
        assert_eq!(SpelledInterval::chromsemi(), i("a1+0"));
        assert_eq!(SpelledIC::chromsemi(), ic("a1"));
        assert_eq!(SpelledIC::octave(), SpelledIC::unison());
        assert!(i("m2+0").is_step());
        assert!(i("-M2+0").is_step());
        assert!(i("a1+0").is_step());
        assert!(!i("m3+0").is_step());
        assert!(!i("m2+1").is_step());
        assert!(ic("M7").is_step());
        assert!(!ic("P4").is_step());
        assert_eq!(3 * i("M2+0"), i("a4+0"));
    }

    #[test]
    fn test_ic_and_embed() {
        assert_eq!(i("M2+1").ic(), ic("M2"));
        assert_eq!(ic("M2").embed(1), i("M2+1"));
        assert_eq!(ic("m6").embed(0), i("m6+0"));
        assert_eq!(i("-M3+0").ic(), ic("m6"));
        assert_eq!(spelled(2, -1).unwrap().ic(), sic(2).unwrap());
    }

    #[test]
    fn test_pitch_decomposition() {
        let p = parse_pitch("Eb4").unwrap();
        assert_eq!(p.letter(), 'E');
        assert_eq!(p.degree(), 2);
        assert_eq!(p.alteration(), -1);
        assert_eq!(p.octaves(), 4);
        assert_eq!(p.fifths(), -3);

        let p = parse_pitch("F##-1").unwrap();
        assert_eq!(p.letter(), 'F');
        assert_eq!(p.alteration(), 2);
        assert_eq!(p.octaves(), -1);

        let p = parse_pitch("Cb4").unwrap();
        assert_eq!(p.octaves(), 4);
        assert_eq!(p.internal_octaves(), 8);

        assert_eq!(spc(1).unwrap().letter(), 'G');
        assert_eq!(spc(-2).unwrap().letter(), 'B');
        assert_eq!(spc(-2).unwrap().alteration(), -1);
        assert_eq!(spc(6).unwrap().alteration(), 1);
        assert_eq!(spc(-1).unwrap().degree(), 3);
    }

    #[test]
    fn test_bounds() {
        assert!(SpelledInterval::try_new(3, -1).is_ok());
        assert_eq!(
            SpelledInterval::try_new(SPELLED_BOUND + 1, 0),
            Err(PitchErr::NumericOverflow("spelled interval fifths"))
        );
        assert!(SpelledIC::try_new(-SPELLED_BOUND - 1).is_err());
        assert!(spelled(0, SPELLED_BOUND + 1).is_err());
        assert!(sic(i64::MAX / 3).is_err());
        assert!(spelledp(i64::MIN, 0).is_err());
        assert_eq!(
            spc(SPELLED_BOUND + 1),
            Err(PitchErr::NumericOverflow("spelled interval class fifths"))
        );
    }

    #[test]
    fn test_boundary_values() {
        let b = SPELLED_BOUND;
        assert_eq!(spelled(b, -b).unwrap().sign(), -1);
        assert_eq!(spelled(-b, b).unwrap().sign(), 1);
        assert_eq!(spelled(b, -b).unwrap().diasteps(), -3 * b);
        assert!(spelled(-b, -b).unwrap() < spelled(b, b).unwrap());
        assert_eq!(sic(b).unwrap().sign(), -1);
        assert_eq!(sic(-b).unwrap().sign(), 1);

        let high = spelled(0, b).unwrap();
        assert_eq!(high.to_string(), "P1+281474976710656");
        assert_eq!((-high).to_string(), "-P1+281474976710656");
        assert_eq!(i("P1+281474976710656"), high);
        assert_eq!(spelledp(0, b).unwrap().to_string(), "C281474976710656");

        // degrees never overflow, even for unchecked values
        assert_eq!(SpelledIC::new(i64::MAX).degree(), 0);
        assert_eq!(SpelledIC::new(i64::MIN).degree(), 3);
    }
}
