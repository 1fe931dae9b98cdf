//! Pitches as points in interval space.
//!
//! A [Pitch] wraps an interval and reads it as "this interval above an implicit origin". The
//! origin depends on the representation: `C0` for spelled pitches, MIDI key 0 for MIDI pitches,
//! and 1 Hz for frequency pitches. All arithmetic is defined through the wrapped interval type, so
//! every [Interval] gives a pitch type for free, and every [IntervalClass] a pitch class type.

use std::ops;

use crate::interval::{
    freq::{FreqIC, FreqInterval},
    midi::{MidiIC, MidiInterval},
    r#trait::{Interval, IntervalClass, ToClass},
    spelled::{SpelledIC, SpelledInterval},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch<I>(I);

/// Pitch classes are pitches over interval classes.
pub type PitchClass<IC> = Pitch<IC>;

pub type SpelledPitch = Pitch<SpelledInterval>;
pub type SpelledPitchClass = Pitch<SpelledIC>;
pub type MidiPitch = Pitch<MidiInterval>;
pub type MidiPitchClass = Pitch<MidiIC>;
pub type FreqPitch = Pitch<FreqInterval>;
pub type FreqPitchClass = Pitch<FreqIC>;

impl<I> Pitch<I> {
    /// The pitch that lies `interval` above the origin.
    pub fn from_interval(interval: I) -> Self {
        Pitch(interval)
    }
}

impl<I: Copy> Pitch<I> {
    /// The interval from the origin to this pitch.
    pub fn to_interval(&self) -> I {
        self.0
    }
}

impl<I: ToClass> Pitch<I> {
    /// The pitch class of this pitch.
    pub fn pc(&self) -> Pitch<I::Class> {
        Pitch(self.0.ic())
    }
}

impl<C: IntervalClass> Pitch<C> {
    /// The canonical pitch of this pitch class, shifted by `octaves`.
    pub fn embed(&self, octaves: i64) -> Pitch<C::Instance> {
        Pitch(self.0.embed(octaves))
    }
}

impl<I: Interval> ops::Add<I> for Pitch<I> {
    type Output = Self;
    fn add(self, x: I) -> Self {
        Pitch(self.0 + x)
    }
}

impl<I: Interval> ops::Sub<I> for Pitch<I> {
    type Output = Self;
    fn sub(self, x: I) -> Self {
        Pitch(self.0 - x)
    }
}

impl<I: Interval> ops::Sub for Pitch<I> {
    type Output = I;
    /// The interval from `x` to `self`.
    fn sub(self, x: Self) -> I {
        self.0 - x.0
    }
}

/// Transpose every pitch by the same interval. Works for every pitch and pitch class type.
pub fn transpose_by<I: Interval>(pitches: &[Pitch<I>], interval: I) -> Vec<Pitch<I>> {
    pitches.iter().map(|&p| p + interval).collect()
}
