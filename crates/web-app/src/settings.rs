use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use trainplan_domain::{
    Equipment, Intensity, Location, MuscleGroup, Property, WorkoutInputs, WorkoutStyle,
};

use crate::log::LevelFilterDef;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// Generator preferences remembered between visits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "IntensityDef")]
    pub intensity: Intensity,
    #[serde(with = "WorkoutStyleDef")]
    pub style: WorkoutStyle,
    pub cardio_split: u32,
    pub duration_minutes: u32,
    pub stretching_minutes: u32,
    pub location: Option<String>,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
}

impl Settings {
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        let name = self.location.as_deref()?;
        let location = Location::iter().find(|l| l.name() == name).copied();
        if location.is_none() {
            warn!("ignoring unknown location \"{name}\"");
        }
        location
    }

    /// Equipment preset of the preferred location, bodyweight only if no location is set.
    #[must_use]
    pub fn equipment(&self) -> Vec<Equipment> {
        self.location()
            .map_or_else(|| vec![Equipment::Bodyweight], |l| l.equipment().to_vec())
    }

    /// Build generator inputs for the given selection from the stored preferences.
    ///
    /// Without an explicit equipment selection the preset of the preferred location is used.
    #[must_use]
    pub fn inputs(&self, muscles: &[MuscleGroup], equipment: &[Equipment]) -> WorkoutInputs {
        WorkoutInputs {
            muscles: muscles.to_vec(),
            equipment: if equipment.is_empty() {
                self.equipment()
            } else {
                equipment.to_vec()
            },
            intensity: self.intensity,
            cardio_split: self.cardio_split.min(100),
            duration_minutes: self.duration_minutes,
            style: self.style,
            stretching_minutes: self.stretching_minutes.min(self.duration_minutes),
            stretching_only: false,
            notes: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let inputs = WorkoutInputs::default();
        Self {
            intensity: inputs.intensity,
            style: inputs.style,
            cardio_split: inputs.cardio_split,
            duration_minutes: inputs.duration_minutes,
            stretching_minutes: inputs.stretching_minutes,
            location: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Intensity", rename_all = "lowercase")]
enum IntensityDef {
    Easy,
    Moderate,
    Hard,
    Brutal,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "WorkoutStyle", rename_all = "lowercase")]
enum WorkoutStyleDef {
    Traditional,
    Circuit,
    Superset,
    Amrap,
}
