//! Pitches and intervals in spelled (Western notation), MIDI, and frequency representations,
//! with a common interval algebra, parsing and printing of note names, and conversions between
//! the representations.

pub mod config;
pub mod convert;
mod custom_serde;
pub mod error;
pub mod interval;
pub mod notename;
pub mod pitch;
pub mod util;

pub use error::PitchErr;
pub use interval::{
    freq::{freqi, freqic, freqp, freqpc, logfreqi, logfreqic, logfreqp, logfreqpc},
    midi::{midi, midi_seq, midic, midip, midipc},
    r#trait::{Chromatic, Interval, IntervalClass, Stepwise, ToClass},
    spelled::{sic, spc, spelled, spelledp, Spelled},
};
pub use notename::parse::{
    parse_interval, parse_interval_class, parse_pitch, parse_pitch_class, parse_spelled,
    parse_spelled_pitch,
};
pub use pitch::{transpose_by, Pitch};
