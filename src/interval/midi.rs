//! MIDI intervals and interval classes: 12-TET semitones, with 60 as middle C.

use std::{fmt, ops};

use num_traits::Zero;

use crate::{
    error::PitchErr,
    interval::r#trait::{
        impl_scalar_mul, Chromatic, Interval, IntervalClass, Stepwise, ToClass,
    },
    pitch::Pitch,
    util::modular::{add_mod12, mod12, sub_mod12},
};

/// Largest number of semitones accepted by the checked constructors. Every spelled interval
/// within [SPELLED_BOUND][crate::interval::spelled::SPELLED_BOUND] converts to a MIDI interval
/// within this bound.
pub const MIDI_BOUND: i64 = 1 << 56;

/// An interval in semitones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MidiInterval(i64);

/// An interval class in `Z_12`. The stored representative is always in `0..12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MidiIC(i64);

impl MidiInterval {
    /// Doesn't check [MIDI_BOUND]. Arithmetic on values beyond it may overflow.
    pub fn new(semitones: i64) -> Self {
        MidiInterval(semitones)
    }

    pub fn try_new(semitones: i64) -> Result<Self, PitchErr> {
        if !(-MIDI_BOUND..=MIDI_BOUND).contains(&semitones) {
            return Err(PitchErr::NumericOverflow("MIDI semitones"));
        }
        Ok(MidiInterval(semitones))
    }

    pub fn semitones(&self) -> i64 {
        self.0
    }
}

impl MidiIC {
    /// Every integer names a class, so this can't fail.
    pub fn new(semitones: i64) -> Self {
        MidiIC(mod12(semitones))
    }

    /// The representative in `0..12`.
    pub fn semitones(&self) -> i64 {
        self.0
    }
}

pub fn midi(semitones: i64) -> Result<MidiInterval, PitchErr> {
    MidiInterval::try_new(semitones)
}

pub fn midic(semitones: i64) -> MidiIC {
    MidiIC::new(semitones)
}

/// A MIDI pitch from its key number.
pub fn midip(key: i64) -> Result<Pitch<MidiInterval>, PitchErr> {
    Ok(Pitch::from_interval(midi(key)?))
}

/// A MIDI pitch class from a key number (or any integer, taken modulo 12).
pub fn midipc(key: i64) -> Pitch<MidiIC> {
    Pitch::from_interval(midic(key))
}

impl TryFrom<i64> for MidiInterval {
    type Error = PitchErr;
    fn try_from(x: i64) -> Result<Self, PitchErr> {
        midi(x)
    }
}

impl From<i64> for MidiIC {
    fn from(x: i64) -> Self {
        midic(x)
    }
}

impl TryFrom<i64> for Pitch<MidiInterval> {
    type Error = PitchErr;
    fn try_from(x: i64) -> Result<Self, PitchErr> {
        midip(x)
    }
}

impl From<i64> for Pitch<MidiIC> {
    fn from(x: i64) -> Self {
        midipc(x)
    }
}

/// Build a sequence of MIDI values from plain integers, e.g.
/// `midi_seq::<MidiPitch>([60, 64, 67])`.
pub fn midi_seq<T>(xs: impl IntoIterator<Item = i64>) -> Result<Vec<T>, PitchErr>
where
    T: TryFrom<i64>,
    PitchErr: From<T::Error>,
{
    xs.into_iter()
        .map(|x| T::try_from(x).map_err(PitchErr::from))
        .collect()
}

impl ops::Add for MidiInterval {
    type Output = Self;
    fn add(self, x: Self) -> Self {
        MidiInterval(self.0 + x.0)
    }
}

impl ops::Sub for MidiInterval {
    type Output = Self;
    fn sub(self, x: Self) -> Self {
        MidiInterval(self.0 - x.0)
    }
}

impl ops::Neg for MidiInterval {
    type Output = Self;
    fn neg(self) -> Self {
        MidiInterval(-self.0)
    }
}

impl ops::Mul<i64> for MidiInterval {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        MidiInterval(self.0 * n)
    }
}

impl_scalar_mul!(MidiInterval);

impl Zero for MidiInterval {
    fn zero() -> Self {
        MidiInterval(0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Interval for MidiInterval {
    fn octave() -> Self {
        MidiInterval(12)
    }

    fn sign(&self) -> i8 {
        self.0.signum() as i8
    }
}

impl ToClass for MidiInterval {
    type Class = MidiIC;
    fn ic(&self) -> MidiIC {
        MidiIC::new(self.0)
    }
}

impl Chromatic for MidiInterval {
    fn chromsemi() -> Self {
        MidiInterval(1)
    }
}

impl Stepwise for MidiInterval {
    /// Up to two semitones in either direction.
    fn is_step(&self) -> bool {
        self.0.abs() <= 2
    }
}

impl ops::Add for MidiIC {
    type Output = Self;
    fn add(self, x: Self) -> Self {
        MidiIC(add_mod12(self.0, x.0))
    }
}

impl ops::Sub for MidiIC {
    type Output = Self;
    fn sub(self, x: Self) -> Self {
        MidiIC(sub_mod12(self.0, x.0))
    }
}

impl ops::Neg for MidiIC {
    type Output = Self;
    fn neg(self) -> Self {
        MidiIC(sub_mod12(0, self.0))
    }
}

impl ops::Mul<i64> for MidiIC {
    type Output = Self;
    fn mul(self, n: i64) -> Self {
        MidiIC::new(self.0 * mod12(n))
    }
}

impl_scalar_mul!(MidiIC);

impl Zero for MidiIC {
    fn zero() -> Self {
        MidiIC(0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Interval for MidiIC {
    fn octave() -> Self {
        MidiIC(0)
    }

    /// Classes up to and including the tritone are upward, the others downward.
    fn sign(&self) -> i8 {
        match self.0 {
            0 => 0,
            1..=6 => 1,
            _ => -1,
        }
    }
}

impl IntervalClass for MidiIC {
    type Instance = MidiInterval;

    /// The representative in `0..12`, plus `octaves` octaves.
    fn embed(&self, octaves: i64) -> MidiInterval {
        MidiInterval(self.0 + 12 * octaves)
    }
}

impl Chromatic for MidiIC {
    fn chromsemi() -> Self {
        MidiIC(1)
    }
}

impl Stepwise for MidiIC {
    fn is_step(&self) -> bool {
        matches!(self.0, 0 | 1 | 2 | 10 | 11)
    }
}

impl fmt::Display for MidiInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

impl fmt::Display for MidiIC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ic{}", self.0)
    }
}

impl fmt::Display for Pitch<MidiInterval> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "p{}", self.to_interval().0)
    }
}

impl fmt::Display for Pitch<MidiIC> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "pc{}", self.to_interval().0)
    }
}
