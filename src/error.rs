use std::{convert::Infallible, error::Error, fmt};

/// Everything that can go wrong when parsing, constructing or converting pitches and intervals.
///
/// Arithmetic on already constructed values never fails, so this type only shows up at the
/// boundaries: the notation parser, the checked constructors, and the conversion layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PitchErr {
    /// There was nothing to parse.
    EmptyInput,
    /// A pitch name did not start with one of `A`..`G`.
    InvalidLetter(char),
    /// The accidentals mix sharps and flats (like `C#b`).
    InvalidAccidental(String),
    /// The quality of an interval is not one of `d...`, `m`, `P`, `M`, `a...`.
    InvalidQuality(String),
    /// The generic interval number is missing or not in `1..=7`.
    InvalidGenericNumber(String),
    /// The quality doesn't exist for the generic interval (like `M4` or `P3`).
    InvalidQualityForNumber { quality: String, number: u8 },
    /// Something follows the pitch or interval class, but it isn't an octave number.
    MalformedOctaveSuffix(String),
    /// There is unparsed input after a complete pitch or interval.
    TrailingInput(String),
    /// An integer component is outside the documented bounds of its representation.
    NumericOverflow(&'static str),
    /// A conversion would need information the source value doesn't carry.
    UnrepresentableConversion(String),
    /// Frequencies and frequency ratios must be positive and finite.
    InvalidRatio(f64),
    /// A configuration could not be read.
    Config(String),
}

impl fmt::Display for PitchErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PitchErr::EmptyInput => write!(f, "empty input"),
            PitchErr::InvalidLetter(c) => {
                write!(f, "invalid letter '{c}': pitch names start with A to G")
            }
            PitchErr::InvalidAccidental(s) => write!(
                f,
                "invalid accidentals '{s}': use either sharps or flats, not both"
            ),
            PitchErr::InvalidQuality(s) => write!(
                f,
                "invalid interval quality '{s}': expected d..., m, P, M, or a..."
            ),
            PitchErr::InvalidGenericNumber(s) => {
                write!(f, "invalid generic interval '{s}': expected a number from 1 to 7")
            }
            PitchErr::InvalidQualityForNumber { quality, number } => write!(
                f,
                "the quality '{quality}' does not exist for generic interval {number}"
            ),
            PitchErr::MalformedOctaveSuffix(s) => write!(f, "malformed octave number '{s}'"),
            PitchErr::TrailingInput(s) => write!(f, "unexpected trailing input '{s}'"),
            PitchErr::NumericOverflow(what) => write!(f, "numeric overflow: {what}"),
            PitchErr::UnrepresentableConversion(what) => {
                write!(f, "unrepresentable conversion: {what}")
            }
            PitchErr::InvalidRatio(x) => {
                write!(f, "invalid frequency or ratio {x}: must be positive and finite")
            }
            PitchErr::Config(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl Error for PitchErr {}

/// Lets generic code treat infallible and fallible integer conversions alike.
impl From<Infallible> for PitchErr {
    fn from(x: Infallible) -> Self {
        match x {}
    }
}
