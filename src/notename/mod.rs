//! The canonical notation of spelled pitches and intervals.
//!
//! * Intervals: `[-]<quality><number>+<octaves>`, e.g. `m3+0` or `-M2+1` (a major ninth down).
//! * Interval classes: `<quality><number>`, e.g. `aa4`. Downward classes are written as their
//!   upward complement.
//! * Pitches: `<letter><accidentals><octave>`, e.g. `E♭4`.
//! * Pitch classes: `<letter><accidentals>`, e.g. `F♯`.
//!
//! Qualities are `d` (repeated for multiple diminution), `m`, `P`, `M`, and `a` (repeated for
//! multiple augmentation). Accidentals are printed as `♯` and `♭`; the alternate flag (`{:#}`)
//! prints the ASCII forms `#` and `b` instead. The [parse] module reads both.

use std::fmt;

use crate::{
    interval::{
        r#trait::Interval,
        spelled::{Spelled, SpelledIC, SpelledInterval},
    },
    pitch::Pitch,
};

pub mod parse;

/// Does the scale degree (counted from 0) have a perfect quality?
pub(crate) fn is_perfect(degree: i64) -> bool {
    matches!(degree, 0 | 3 | 4)
}

fn write_repeated<W: fmt::Write>(f: &mut W, c: char, n: i64) -> fmt::Result {
    for _ in 0..n {
        f.write_char(c)?;
    }
    Ok(())
}

/// Write the quality of an interval class with the given degree and alteration.
fn write_quality<W: fmt::Write>(f: &mut W, degree: i64, alteration: i64) -> fmt::Result {
    if is_perfect(degree) {
        match alteration {
            0 => f.write_char('P'),
            a if a > 0 => write_repeated(f, 'a', a),
            a => write_repeated(f, 'd', -a),
        }
    } else {
        match alteration {
            0 => f.write_char('M'),
            -1 => f.write_char('m'),
            a if a > 0 => write_repeated(f, 'a', a),
            a => write_repeated(f, 'd', -a - 1),
        }
    }
}

fn write_accidentals<W: fmt::Write>(f: &mut W, alteration: i64, ascii: bool) -> fmt::Result {
    let (sharp, flat) = if ascii { ('#', 'b') } else { ('♯', '♭') };
    if alteration > 0 {
        write_repeated(f, sharp, alteration)
    } else {
        write_repeated(f, flat, -alteration)
    }
}

fn write_class<W: fmt::Write>(f: &mut W, ic: &SpelledIC) -> fmt::Result {
    write_quality(f, ic.degree(), ic.alteration())?;
    write!(f, "{}", ic.degree() + 1)
}

impl fmt::Display for SpelledInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sign() < 0 {
            f.write_str("-")?;
            return fmt::Display::fmt(&-*self, f);
        }
        write_quality(f, self.degree(), self.alteration())?;
        write!(f, "{}+{}", self.degree() + 1, self.octaves())
    }
}

impl fmt::Display for SpelledIC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_class(f, self)
    }
}

impl fmt::Display for Pitch<SpelledInterval> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ascii = f.alternate();
        write!(f, "{}", self.letter())?;
        write_accidentals(f, self.alteration(), ascii)?;
        write!(f, "{}", self.octaves())
    }
}

impl fmt::Display for Pitch<SpelledIC> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ascii = f.alternate();
        write!(f, "{}", self.letter())?;
        write_accidentals(f, self.alteration(), ascii)
    }
}
