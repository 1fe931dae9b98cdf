//! Parsing the canonical notation of spelled pitches and intervals.
//!
//! Whether a string describes an instance or a class is decided by the presence of an octave
//! number: `M3+0` is an interval, `M3` an interval class, `G4` a pitch, and `G` a pitch class.
//!
//! ```text
//! pitch          := letter accidentals [octave]
//! interval       := ["-"] quality number [("+" octave) | ("-" digits)]
//! letter         := 'A'..'G'
//! accidentals    := ('b' | '♭')* | ('#' | '♯')*
//! quality        := 'd'+ | 'm' | 'P' | 'M' | 'a'+
//! number         := '1'..'7'
//! octave         := ["-"] digits
//! ```

use std::str::FromStr;

use crate::{
    error::PitchErr,
    interval::spelled::{fifths_from_degree, SpelledIC, SpelledInterval, SPELLED_BOUND},
    notename::is_perfect,
    pitch::Pitch,
};

/// The result of parsing an interval string of either kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedInterval {
    Interval(SpelledInterval),
    Class(SpelledIC),
}

/// The result of parsing a pitch string of either kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedPitch {
    Pitch(Pitch<SpelledInterval>),
    Class(Pitch<SpelledIC>),
}

/// private: the octave number of a pitch or interval, together with the text it was read from.
struct Octave<'a> {
    value: i64,
    text: &'a str,
}

/// private: an interval string, taken apart.
struct IntervalParts<'a> {
    negative: bool,
    fifths: i64,
    octave: Option<Octave<'a>>,
}

/// private: a pitch string, taken apart.
struct PitchParts<'a> {
    fifths: i64,
    octave: Option<Octave<'a>>,
}

/// Read an (optionally negative) decimal number that has to make up all of `s`. `s` is the whole
/// suffix, including the sign, and is used for error messages.
fn read_octave_number(s: &str, digits: &str, negative: bool) -> Result<i64, PitchErr> {
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(PitchErr::MalformedOctaveSuffix(s.into()));
    }
    if end < digits.len() {
        return Err(PitchErr::TrailingInput(digits[end..].into()));
    }
    let magnitude: i64 = digits
        .parse()
        .map_err(|_| PitchErr::NumericOverflow("octave number"))?;
    if magnitude > SPELLED_BOUND {
        return Err(PitchErr::NumericOverflow("octave number"));
    }
    Ok(if negative { -magnitude } else { magnitude })
}

fn letter_degree(c: char) -> Result<usize, PitchErr> {
    match c {
        'C' => Ok(0),
        'D' => Ok(1),
        'E' => Ok(2),
        'F' => Ok(3),
        'G' => Ok(4),
        'A' => Ok(5),
        'B' => Ok(6),
        _ => Err(PitchErr::InvalidLetter(c)),
    }
}

/// Reads the accidentals at the start of `s`. Returns the alteration and the rest of the input.
fn read_accidentals(s: &str) -> Result<(i64, &str), PitchErr> {
    let end = s
        .find(|c: char| !matches!(c, 'b' | '♭' | '#' | '♯'))
        .unwrap_or(s.len());
    let (run, rest) = s.split_at(end);
    let sharps = run.chars().filter(|c| matches!(c, '#' | '♯')).count() as i64;
    let flats = run.chars().filter(|c| matches!(c, 'b' | '♭')).count() as i64;
    if sharps > 0 && flats > 0 {
        return Err(PitchErr::InvalidAccidental(run.into()));
    }
    Ok((sharps - flats, rest))
}

fn split_pitch(s: &str) -> Result<PitchParts<'_>, PitchErr> {
    let mut chars = s.chars();
    let letter = chars.next().ok_or(PitchErr::EmptyInput)?;
    let degree = letter_degree(letter)?;
    let (alteration, rest) = read_accidentals(chars.as_str())?;
    let fifths = fifths_from_degree(degree, alteration);

    let octave = if rest.is_empty() {
        None
    } else if let Some(digits) = rest.strip_prefix('-') {
        Some(Octave {
            value: read_octave_number(rest, digits, true)?,
            text: rest,
        })
    } else if rest.starts_with(|c: char| c.is_ascii_digit()) {
        Some(Octave {
            value: read_octave_number(rest, rest, false)?,
            text: rest,
        })
    } else {
        return Err(PitchErr::TrailingInput(rest.into()));
    };

    Ok(PitchParts { fifths, octave })
}

/// Reads the quality at the start of `s`. Returns the quality and the rest of the input.
fn read_quality(s: &str) -> Result<(&str, &str), PitchErr> {
    let end = s
        .find(|c: char| !matches!(c, 'd' | 'm' | 'P' | 'M' | 'a'))
        .unwrap_or(s.len());
    let (quality, rest) = s.split_at(end);
    let mut chars = quality.chars();
    match chars.next() {
        None => Err(PitchErr::InvalidQuality(quality.into())),
        Some(c @ ('d' | 'a')) if chars.all(|x| x == c) => Ok((quality, rest)),
        Some('m' | 'P' | 'M') if quality.len() == 1 => Ok((quality, rest)),
        Some(_) => Err(PitchErr::InvalidQuality(quality.into())),
    }
}

/// The alteration expressed by a quality for the given scale degree.
fn quality_alteration(quality: &str, degree: usize) -> Result<i64, PitchErr> {
    let perfect = is_perfect(degree as i64);
    let n = quality.len() as i64;
    match (quality.as_bytes()[0], perfect) {
        (b'a', _) => Ok(n),
        (b'd', true) => Ok(-n),
        (b'd', false) => Ok(-n - 1),
        (b'P', true) => Ok(0),
        (b'M', false) => Ok(0),
        (b'm', false) => Ok(-1),
        _ => Err(PitchErr::InvalidQualityForNumber {
            quality: quality.into(),
            number: degree as u8 + 1,
        }),
    }
}

fn split_interval(s: &str) -> Result<IntervalParts<'_>, PitchErr> {
    if s.is_empty() {
        return Err(PitchErr::EmptyInput);
    }
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (quality, rest) = read_quality(s)?;

    let number_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (number, rest) = rest.split_at(number_end);
    let degree = match number {
        "1" | "2" | "3" | "4" | "5" | "6" | "7" => (number.as_bytes()[0] - b'1') as usize,
        _ => return Err(PitchErr::InvalidGenericNumber(number.into())),
    };
    let fifths = fifths_from_degree(degree, quality_alteration(quality, degree)?);

    let octave = if rest.is_empty() {
        None
    } else if let Some(signed) = rest.strip_prefix('+') {
        let (digits, negative) = match signed.strip_prefix('-') {
            Some(digits) => (digits, true),
            None => (signed, false),
        };
        Some(Octave {
            value: read_octave_number(rest, digits, negative)?,
            text: rest,
        })
    } else if let Some(digits) = rest.strip_prefix('-') {
        // shorthand for `+-n`
        Some(Octave {
            value: read_octave_number(rest, digits, true)?,
            text: rest,
        })
    } else {
        return Err(PitchErr::TrailingInput(rest.into()));
    };

    Ok(IntervalParts {
        negative,
        fifths,
        octave,
    })
}

fn logged<T: std::fmt::Debug>(s: &str, res: Result<T, PitchErr>) -> Result<T, PitchErr> {
    match &res {
        Ok(x) => log::trace!("parsed {s:?} as {x:?}"),
        Err(e) => log::debug!("could not parse {s:?}: {e}"),
    }
    res
}

/// Parse a spelled interval or interval class. The kind is determined by the presence of an
/// octave suffix: `M3+0` is an interval, `M3` an interval class.
pub fn parse_spelled(s: &str) -> Result<ParsedInterval, PitchErr> {
    let res = split_interval(s).map(|parts| {
        let sign = if parts.negative { -1 } else { 1 };
        match parts.octave {
            Some(octave) => ParsedInterval::Interval(
                SpelledInterval::from_notated(parts.fifths, octave.value) * sign,
            ),
            None => ParsedInterval::Class(SpelledIC::new(parts.fifths) * sign),
        }
    });
    logged(s, res)
}

/// Parse a spelled pitch or pitch class. The kind is determined by the presence of an octave
/// number: `G4` is a pitch, `G` a pitch class.
pub fn parse_spelled_pitch(s: &str) -> Result<ParsedPitch, PitchErr> {
    let res = split_pitch(s).map(|parts| match parts.octave {
        Some(octave) => ParsedPitch::Pitch(Pitch::from_interval(SpelledInterval::from_notated(
            parts.fifths,
            octave.value,
        ))),
        None => ParsedPitch::Class(Pitch::from_interval(SpelledIC::new(parts.fifths))),
    });
    logged(s, res)
}

/// Parse a spelled interval, which must have an octave suffix.
pub fn parse_interval(s: &str) -> Result<SpelledInterval, PitchErr> {
    match parse_spelled(s)? {
        ParsedInterval::Interval(x) => Ok(x),
        ParsedInterval::Class(_) => Err(PitchErr::MalformedOctaveSuffix(String::new())),
    }
}

/// Parse a spelled interval class, which must not have an octave suffix.
pub fn parse_interval_class(s: &str) -> Result<SpelledIC, PitchErr> {
    match parse_spelled(s)? {
        ParsedInterval::Class(x) => Ok(x),
        ParsedInterval::Interval(_) => Err(PitchErr::TrailingInput(
            split_interval(s)?
                .octave
                .map(|o| o.text.to_string())
                .unwrap_or_default(),
        )),
    }
}

/// Parse a spelled pitch, which must have an octave number.
pub fn parse_pitch(s: &str) -> Result<Pitch<SpelledInterval>, PitchErr> {
    match parse_spelled_pitch(s)? {
        ParsedPitch::Pitch(x) => Ok(x),
        ParsedPitch::Class(_) => Err(PitchErr::MalformedOctaveSuffix(String::new())),
    }
}

/// Parse a spelled pitch class, which must not have an octave number.
pub fn parse_pitch_class(s: &str) -> Result<Pitch<SpelledIC>, PitchErr> {
    match parse_spelled_pitch(s)? {
        ParsedPitch::Class(x) => Ok(x),
        ParsedPitch::Pitch(_) => Err(PitchErr::TrailingInput(
            split_pitch(s)?
                .octave
                .map(|o| o.text.to_string())
                .unwrap_or_default(),
        )),
    }
}

impl FromStr for SpelledInterval {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_interval(s)
    }
}

impl FromStr for SpelledIC {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_interval_class(s)
    }
}

impl FromStr for Pitch<SpelledInterval> {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_pitch(s)
    }
}

impl FromStr for Pitch<SpelledIC> {
    type Err = PitchErr;
    fn from_str(s: &str) -> Result<Self, PitchErr> {
        parse_pitch_class(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval::{
        r#trait::Interval,
        spelled::{sic, spc, spelled, spelledp, Spelled},
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_by_suffix() {
        assert_eq!(
            parse_spelled("m3").unwrap(),
            ParsedInterval::Class(sic(-3).unwrap())
        );
        assert_eq!(
            parse_spelled("m3+0").unwrap(),
            ParsedInterval::Interval(spelled(-3, 2).unwrap())
        );
        assert_eq!(parse_spelled_pitch("Eb").unwrap(), ParsedPitch::Class(spc(-3).unwrap()));
        assert_eq!(
            parse_spelled_pitch("Eb4").unwrap(),
            ParsedPitch::Pitch(spelledp(-3, 6).unwrap())
        );
    }

    #[test]
    fn test_negative_intervals() {
        assert_eq!(parse_interval_class("-M3").unwrap(), parse_interval_class("m6").unwrap());
        assert_eq!(parse_interval_class("-M3").unwrap(), -parse_interval_class("M3").unwrap());
        assert_eq!(parse_interval("-M2+1").unwrap(), -parse_interval("M2+1").unwrap());
        assert_eq!(parse_interval("-M2+1").unwrap().diasteps(), -8);
        assert_eq!(parse_interval("M2+-1").unwrap(), spelled(2, -2).unwrap());
        assert_eq!(parse_interval("M2-1").unwrap(), parse_interval("M2+-1").unwrap());
        assert_eq!(parse_interval("-m3+-2").unwrap(), -parse_interval("m3-2").unwrap());
        assert_eq!(parse_interval("P1+-1").unwrap(), -SpelledInterval::octave());
        assert_eq!(parse_interval("-P1+0").unwrap(), SpelledInterval::unison());
    }

    #[test]
    fn test_pitch_intervals() {
        assert_eq!(
            parse_pitch("Eb4").unwrap() - parse_pitch("C4").unwrap(),
            parse_interval("m3+0").unwrap()
        );
        assert_eq!(
            parse_pitch("C5").unwrap() - parse_pitch("B♯4").unwrap(),
            parse_interval("d2+0").unwrap()
        );
        assert_eq!(
            "D♭♭3".parse::<Pitch<SpelledInterval>>().unwrap(),
            spelledp(-12, 10).unwrap()
        );
        assert_eq!("aa4+2".parse::<SpelledInterval>().unwrap(), spelled(13, -5).unwrap());
        assert_eq!("dd7".parse::<SpelledIC>().unwrap(), sic(-16).unwrap());
    }

    #[test]
    fn test_errors() {
        let examples: &[(&str, PitchErr)] = &[
            (
                "M1",
                PitchErr::InvalidQualityForNumber {
                    quality: "M".into(),
                    number: 1,
                },
            ),
            (
                "P3+0",
                PitchErr::InvalidQualityForNumber {
                    quality: "P".into(),
                    number: 3,
                },
            ),
            (
                "m5",
                PitchErr::InvalidQualityForNumber {
                    quality: "m".into(),
                    number: 5,
                },
            ),
            ("x3", PitchErr::InvalidQuality("".into())),
            ("MM3", PitchErr::InvalidQuality("MM".into())),
            ("ad3", PitchErr::InvalidQuality("ad".into())),
            ("M8", PitchErr::InvalidGenericNumber("8".into())),
            ("M0", PitchErr::InvalidGenericNumber("0".into())),
            ("M", PitchErr::InvalidGenericNumber("".into())),
            ("M3+", PitchErr::MalformedOctaveSuffix("+".into())),
            ("M3+x", PitchErr::MalformedOctaveSuffix("+x".into())),
            ("M3+1x", PitchErr::TrailingInput("x".into())),
            ("M3+-", PitchErr::MalformedOctaveSuffix("+-".into())),
            ("M3+--1", PitchErr::MalformedOctaveSuffix("+--1".into())),
            ("M3-+1", PitchErr::MalformedOctaveSuffix("-+1".into())),
            ("M3 ", PitchErr::TrailingInput(" ".into())),
            ("", PitchErr::EmptyInput),
            (
                "M3+99999999999999999999",
                PitchErr::NumericOverflow("octave number"),
            ),
        ];
        for (s, e) in examples {
            assert_eq!(parse_spelled(s).unwrap_err(), *e, "parsing {s:?}");
        }

        let examples: &[(&str, PitchErr)] = &[
            ("H4", PitchErr::InvalidLetter('H')),
            ("c4", PitchErr::InvalidLetter('c')),
            ("C#b4", PitchErr::InvalidAccidental("#b".into())),
            ("E♭#", PitchErr::InvalidAccidental("♭#".into())),
            ("C4x", PitchErr::TrailingInput("x".into())),
            ("Cx", PitchErr::TrailingInput("x".into())),
            ("C-", PitchErr::MalformedOctaveSuffix("-".into())),
            ("", PitchErr::EmptyInput),
        ];
        for (s, e) in examples {
            assert_eq!(parse_spelled_pitch(s).unwrap_err(), *e, "parsing {s:?}");
        }
    }

    #[test]
    fn test_kind_mismatch() {
        assert_eq!(
            parse_interval("M3"),
            Err(PitchErr::MalformedOctaveSuffix(String::new()))
        );
        assert_eq!(
            parse_interval_class("M3+1"),
            Err(PitchErr::TrailingInput("+1".into()))
        );
        assert_eq!(
            parse_pitch("C"),
            Err(PitchErr::MalformedOctaveSuffix(String::new()))
        );
        assert_eq!(parse_pitch_class("C4"), Err(PitchErr::TrailingInput("4".into())));
    }

    #[test]
    fn test_roundtrip() {
        for f in -15..=15 {
            let c = sic(f).unwrap();
            assert_eq!(parse_interval_class(&c.to_string()).unwrap(), c);
            assert_eq!(parse_pitch_class(&spc(f).unwrap().to_string()).unwrap(), spc(f).unwrap());
            for o in -12..=12 {
                let x = spelled(f, o).unwrap();
                assert_eq!(parse_interval(&x.to_string()).unwrap(), x, "{x:?}");
                let p = spelledp(f, o).unwrap();
                assert_eq!(parse_pitch(&p.to_string()).unwrap(), p, "{p:?}");
                assert_eq!(parse_pitch(&format!("{p:#}")).unwrap(), p, "{p:?}");
            }
        }
    }
}
