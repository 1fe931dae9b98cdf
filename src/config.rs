//! Settings that the value types themselves don't carry: the reference tuning that anchors
//! frequencies to MIDI keys, and the tolerance used when snapping frequencies to that grid.

use serde_derive::{Deserialize, Serialize};

use crate::{
    convert::Tuning,
    error::PitchErr,
    interval::{
        freq::{FreqInterval, FREQ_EPSILON},
        midi::MidiInterval,
    },
    pitch::Pitch,
};

/// Marker for the crate version a configuration was written for. Serializes as the version
/// string and refuses to deserialize any other version.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchesVersion;

fn default_tolerance() -> f64 {
    FREQ_EPSILON
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<PitchesVersion>,
    #[serde(default)]
    pub tuning: Tuning,
    /// in semitones
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: Some(PitchesVersion),
            tuning: Tuning::default(),
            tolerance: default_tolerance(),
        }
    }
}

impl Config {
    pub fn from_yaml(input: &str) -> Result<Self, PitchErr> {
        let config: Config = serde_yml::from_str(input).map_err(|e| {
            log::debug!("rejected configuration: {e}");
            PitchErr::Config(e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, PitchErr> {
        serde_yml::to_string(self).map_err(|e| PitchErr::Config(e.to_string()))
    }

    fn validate(&self) -> Result<(), PitchErr> {
        Tuning::new(self.tuning.reference, self.tuning.frequency)?;
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(PitchErr::Config(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// [Tuning::midi_of] with the configured tuning and tolerance.
    pub fn midi_of(&self, p: &Pitch<FreqInterval>) -> Result<Pitch<MidiInterval>, PitchErr> {
        self.tuning.midi_of(p, self.tolerance)
    }
}
