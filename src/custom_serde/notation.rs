//! Spelled values serialize as their (ASCII) names, so `"m3+0"`, `"a4"`, `"Eb4"`, or `"F#"`.
//! Deserialization accepts everything the parser accepts.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::PitchErr,
    interval::spelled::{SpelledIC, SpelledInterval},
    pitch::Pitch,
};

fn serialize_name<T: fmt::Display, S: Serializer>(x: &T, ser: S) -> Result<S::Ok, S::Error> {
    ser.collect_str(&format_args!("{x:#}"))
}

fn deserialize_name<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr<Err = PitchErr>,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Serialize for SpelledInterval {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        serialize_name(self, ser)
    }
}

impl<'de> Deserialize<'de> for SpelledInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

impl Serialize for SpelledIC {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        serialize_name(self, ser)
    }
}

impl<'de> Deserialize<'de> for SpelledIC {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

impl Serialize for Pitch<SpelledInterval> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        serialize_name(self, ser)
    }
}

impl<'de> Deserialize<'de> for Pitch<SpelledInterval> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

impl Serialize for Pitch<SpelledIC> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        serialize_name(self, ser)
    }
}

impl<'de> Deserialize<'de> for Pitch<SpelledIC> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval::spelled::{sic, spc, spelled, spelledp};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_names() {
        assert_eq!(serde_json::to_string(&spelled(-3, 2).unwrap()).unwrap(), "\"m3+0\"");
        assert_eq!(serde_json::to_string(&spelled(-4, 1).unwrap()).unwrap(), "\"-M3+1\"");
        assert_eq!(serde_json::to_string(&sic(6).unwrap()).unwrap(), "\"a4\"");
        assert_eq!(serde_json::to_string(&spelledp(-3, 6).unwrap()).unwrap(), "\"Eb4\"");
        assert_eq!(serde_json::to_string(&spc(6).unwrap()).unwrap(), "\"F#\"");
        let scale: Vec<_> = [0, -1, -2].map(|f| spc(f).unwrap()).into();
        assert_eq!(serde_json::to_string(&scale).unwrap(), "[\"C\",\"F\",\"Bb\"]");
    }

    #[test]
    fn test_deserialize_names() {
        assert_eq!(
            serde_json::from_str::<SpelledInterval>("\"-M2+1\"").unwrap(),
            spelled(-2, 0).unwrap()
        );
        assert_eq!(
            serde_json::from_str::<Pitch<SpelledInterval>>("\"E♭4\"").unwrap(),
            spelledp(-3, 6).unwrap()
        );
        assert_eq!(
            serde_json::from_str::<Pitch<SpelledIC>>("\"F##\"").unwrap(),
            spc(13).unwrap()
        );
        assert!(serde_json::from_str::<SpelledIC>("\"M4\"").is_err());
        assert!(serde_json::from_str::<SpelledIC>("\"M3+0\"").is_err());
        assert!(serde_json::from_str::<SpelledInterval>("3").is_err());
    }
}
