//! Conversions between representations.
//!
//! Spelled values map onto MIDI values by forgetting the spelling. MIDI values map onto
//! frequencies through 12-tone equal temperament; for pitches this needs an explicit [Tuning]
//! reference. Going back from frequencies is only possible for frequencies that lie on the grid
//! of a tuning, and there is no way back to spelled values at all, since frequencies carry no
//! spelling.

use std::f64::consts::LN_2;

use serde_derive::{Deserialize, Serialize};

use crate::{
    error::PitchErr,
    interval::{
        freq::{FreqIC, FreqInterval},
        midi::{MidiIC, MidiInterval, MIDI_BOUND},
        spelled::{Spelled, SpelledIC, SpelledInterval},
    },
    pitch::Pitch,
};

/// Conversion to the corresponding MIDI type.
pub trait ToMidi {
    type Midi;
    fn to_midi(&self) -> Result<Self::Midi, PitchErr>;
}

/// Conversion of intervals to frequency ratios in 12-tone equal temperament.
pub trait ToFreq {
    type Freq;
    fn to_freq(&self) -> Self::Freq;
}

/// `7 * fifths + 12 * octaves`, checked.
fn spelled_semitones(fifths: i64, octaves: i64) -> Result<i64, PitchErr> {
    fifths
        .checked_mul(7)
        .and_then(|f| octaves.checked_mul(12).and_then(|o| f.checked_add(o)))
        .ok_or(PitchErr::NumericOverflow("semitones of a spelled interval"))
}

impl ToMidi for SpelledInterval {
    type Midi = MidiInterval;
    fn to_midi(&self) -> Result<MidiInterval, PitchErr> {
        MidiInterval::try_new(spelled_semitones(
            self.fifths(),
            self.internal_octaves(),
        )?)
    }
}

impl ToMidi for SpelledIC {
    type Midi = MidiIC;
    fn to_midi(&self) -> Result<MidiIC, PitchErr> {
        Ok(MidiIC::new(spelled_semitones(self.fifths(), 0)?))
    }
}

/// Spelled pitches count from `C0`, MIDI pitches from the C an octave below, so `C4` is 60.
impl ToMidi for Pitch<SpelledInterval> {
    type Midi = Pitch<MidiInterval>;
    fn to_midi(&self) -> Result<Pitch<MidiInterval>, PitchErr> {
        let semitones = spelled_semitones(self.fifths(), self.internal_octaves())?
            .checked_add(12)
            .ok_or(PitchErr::NumericOverflow("MIDI key of a spelled pitch"))?;
        Ok(Pitch::from_interval(MidiInterval::try_new(semitones)?))
    }
}

impl ToMidi for Pitch<SpelledIC> {
    type Midi = Pitch<MidiIC>;
    fn to_midi(&self) -> Result<Pitch<MidiIC>, PitchErr> {
        Ok(Pitch::from_interval(self.to_interval().to_midi()?))
    }
}

impl ToMidi for MidiInterval {
    type Midi = MidiInterval;
    fn to_midi(&self) -> Result<MidiInterval, PitchErr> {
        Ok(*self)
    }
}

impl ToMidi for MidiIC {
    type Midi = MidiIC;
    fn to_midi(&self) -> Result<MidiIC, PitchErr> {
        Ok(*self)
    }
}

impl ToMidi for Pitch<MidiInterval> {
    type Midi = Pitch<MidiInterval>;
    fn to_midi(&self) -> Result<Pitch<MidiInterval>, PitchErr> {
        Ok(*self)
    }
}

impl ToMidi for Pitch<MidiIC> {
    type Midi = Pitch<MidiIC>;
    fn to_midi(&self) -> Result<Pitch<MidiIC>, PitchErr> {
        Ok(*self)
    }
}

impl ToFreq for MidiInterval {
    type Freq = FreqInterval;
    fn to_freq(&self) -> FreqInterval {
        FreqInterval::from_log(self.semitones() as f64 / 12.0 * LN_2)
    }
}

impl ToFreq for MidiIC {
    type Freq = FreqIC;
    fn to_freq(&self) -> FreqIC {
        FreqIC::from_log(self.semitones() as f64 / 12.0 * LN_2)
    }
}

/// A reference for 12-tone equal temperament: the MIDI key `reference` sounds at `frequency` Hz.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct Tuning {
    pub reference: i64,
    pub frequency: f64,
}

impl Default for Tuning {
    /// A4 = 440 Hz.
    fn default() -> Self {
        Tuning {
            reference: 69,
            frequency: 440.0,
        }
    }
}

impl Tuning {
    pub fn new(reference: i64, frequency: f64) -> Result<Self, PitchErr> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(PitchErr::InvalidRatio(frequency));
        }
        Ok(Tuning {
            reference,
            frequency,
        })
    }

    /// The frequency of a MIDI pitch.
    pub fn frequency_of(&self, p: &Pitch<MidiInterval>) -> Pitch<FreqInterval> {
        let offset = p.to_interval().semitones() as f64 - self.reference as f64;
        Pitch::from_interval(FreqInterval::from_log(
            self.frequency.ln() + offset / 12.0 * LN_2,
        ))
    }

    /// The frequency of a MIDI pitch class, as a frequency pitch class.
    pub fn frequency_of_class(&self, p: &Pitch<MidiIC>) -> Pitch<FreqIC> {
        self.frequency_of(&p.embed(0)).pc()
    }

    /// The frequency of a spelled pitch, via its MIDI pitch.
    pub fn frequency_of_spelled(
        &self,
        p: &Pitch<SpelledInterval>,
    ) -> Result<Pitch<FreqInterval>, PitchErr> {
        Ok(self.frequency_of(&p.to_midi()?))
    }

    /// The MIDI pitch of a frequency pitch that lies within `tolerance` (in semitones) of the
    /// equal-tempered grid of this tuning.
    pub fn midi_of(
        &self,
        p: &Pitch<FreqInterval>,
        tolerance: f64,
    ) -> Result<Pitch<MidiInterval>, PitchErr> {
        let log_offset = p.to_interval().log_ratio() - self.frequency.ln();
        let semitones = 12.0 * log_offset / LN_2 + self.reference as f64;
        let key = semitones.round();
        if !semitones.is_finite() || key.abs() > MIDI_BOUND as f64 {
            log::debug!("{semitones} semitones are out of range");
            return Err(PitchErr::NumericOverflow("MIDI key of a frequency"));
        }
        if (semitones - key).abs() > tolerance {
            log::debug!("{semitones} semitones are not within {tolerance} of a MIDI key");
            return Err(PitchErr::UnrepresentableConversion(format!(
                "{} Hz is not a MIDI pitch in this tuning",
                p.frequency()
            )));
        }
        Ok(Pitch::from_interval(MidiInterval::try_new(key as i64)?))
    }
}
