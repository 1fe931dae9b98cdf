//! The `version` field of a configuration is written as the version of this crate. Reading a
//! configuration written for any other version fails, naming both versions.

use std::fmt;

use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::config::PitchesVersion;

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct ThisVersion;

impl de::Expected for ThisVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "`version: {VERSION}` (the version of pitches reading it)")
    }
}

impl Serialize for PitchesVersion {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(VERSION)
    }
}

impl<'de> Deserialize<'de> for PitchesVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let found = String::deserialize(deserializer)?;
        if found != VERSION {
            log::debug!("configuration is for pitches {found}, this is {VERSION}");
            return Err(de::Error::invalid_value(
                Unexpected::Str(&found),
                &ThisVersion,
            ));
        }
        Ok(PitchesVersion)
    }
}
