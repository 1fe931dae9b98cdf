//! MIDI values serialize as integers (semitones or keys), frequency values as linear ratios (or
//! Hz, for pitches). Classes are reduced again when deserialized, so `15` reads as the class `3`.
//! MIDI intervals and pitches beyond [MIDI_BOUND][crate::interval::midi::MIDI_BOUND] are rejected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    interval::{
        freq::{FreqIC, FreqInterval},
        midi::{MidiIC, MidiInterval},
    },
    pitch::Pitch,
};

impl Serialize for MidiInterval {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_i64(self.semitones())
    }
}

impl<'de> Deserialize<'de> for MidiInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MidiInterval::try_new(i64::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl Serialize for MidiIC {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_i64(self.semitones())
    }
}

impl<'de> Deserialize<'de> for MidiIC {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(MidiIC::new(i64::deserialize(deserializer)?))
    }
}

impl Serialize for Pitch<MidiInterval> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        self.to_interval().serialize(ser)
    }
}

impl<'de> Deserialize<'de> for Pitch<MidiInterval> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Pitch::from_interval(MidiInterval::deserialize(deserializer)?))
    }
}

impl Serialize for Pitch<MidiIC> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        self.to_interval().serialize(ser)
    }
}

impl<'de> Deserialize<'de> for Pitch<MidiIC> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Pitch::from_interval(MidiIC::deserialize(deserializer)?))
    }
}

impl Serialize for FreqInterval {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_f64(self.ratio())
    }
}

impl<'de> Deserialize<'de> for FreqInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FreqInterval::from_ratio(f64::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl Serialize for FreqIC {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_f64(self.ratio())
    }
}

impl<'de> Deserialize<'de> for FreqIC {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FreqIC::from_ratio(f64::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Pitch<FreqInterval> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        self.to_interval().serialize(ser)
    }
}

impl<'de> Deserialize<'de> for Pitch<FreqInterval> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Pitch::from_interval(FreqInterval::deserialize(deserializer)?))
    }
}

impl Serialize for Pitch<FreqIC> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        self.to_interval().serialize(ser)
    }
}

impl<'de> Deserialize<'de> for Pitch<FreqIC> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Pitch::from_interval(FreqIC::deserialize(deserializer)?))
    }
}
