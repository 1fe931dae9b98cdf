//! Intervals in three representations, all sharing the algebra in [r#trait]:
//!
//! * [spelled]: intervals as written in Western notation, distinguishing `m3` from `a2`.
//! * [midi]: equal-tempered semitones, forgetting the spelling.
//! * [freq]: (logarithmic) frequency ratios.
//!
//! Each representation comes as an interval type and an octave-equivalent interval class type.
//! Pitches are intervals above a fixed origin, see [crate::pitch].

pub mod freq;
pub mod midi;
pub mod spelled;
pub mod r#trait;
