use std::{fmt, slice::Iter};

use crate::{Equipment, MuscleGroup, Property};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Intensity {
    Easy,
    #[default]
    Moderate,
    Hard,
    Brutal,
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITY: [Intensity; 4] = [
            Intensity::Easy,
            Intensity::Moderate,
            Intensity::Hard,
            Intensity::Brutal,
        ];
        INTENSITY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Easy => "easy",
            Intensity::Moderate => "moderate",
            Intensity::Hard => "hard",
            Intensity::Brutal => "brutal",
        }
    }
}

impl Intensity {
    #[must_use]
    pub fn sets(self) -> u32 {
        match self {
            Intensity::Easy => 2,
            Intensity::Moderate => 3,
            Intensity::Hard => 4,
            Intensity::Brutal => 5,
        }
    }

    #[must_use]
    pub fn rest_seconds(self) -> u32 {
        match self {
            Intensity::Easy => 90,
            Intensity::Moderate => 60,
            Intensity::Hard => 45,
            Intensity::Brutal => 30,
        }
    }

    /// Rest between exercises of a circuit.
    #[must_use]
    pub fn circuit_rest_seconds(self) -> u32 {
        match self {
            Intensity::Brutal => 15,
            Intensity::Hard => 20,
            Intensity::Easy | Intensity::Moderate => 30,
        }
    }

    /// Rest after the second exercise of a superset pair.
    #[must_use]
    pub fn superset_rest_seconds(self) -> u32 {
        match self {
            Intensity::Brutal => 30,
            Intensity::Hard => 45,
            Intensity::Easy | Intensity::Moderate => 60,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Intensity {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Intensity::iter()
            .find(|i| i.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| InputError::InvalidIntensity(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WorkoutStyle {
    #[default]
    Traditional,
    Circuit,
    Superset,
    Amrap,
}

impl Property for WorkoutStyle {
    fn iter() -> Iter<'static, WorkoutStyle> {
        static STYLES: [WorkoutStyle; 4] = [
            WorkoutStyle::Traditional,
            WorkoutStyle::Circuit,
            WorkoutStyle::Superset,
            WorkoutStyle::Amrap,
        ];
        STYLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutStyle::Traditional => "traditional",
            WorkoutStyle::Circuit => "circuit",
            WorkoutStyle::Superset => "superset",
            WorkoutStyle::Amrap => "amrap",
        }
    }
}

impl fmt::Display for WorkoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for WorkoutStyle {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        WorkoutStyle::iter()
            .find(|s| s.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| InputError::InvalidStyle(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutInputs {
    pub muscles: Vec<MuscleGroup>,
    pub equipment: Vec<Equipment>,
    pub intensity: Intensity,
    /// Share of the main workout spent on cardio in percent.
    pub cardio_split: u32,
    pub duration_minutes: u32,
    pub style: WorkoutStyle,
    pub stretching_minutes: u32,
    pub stretching_only: bool,
    pub notes: Option<String>,
}

impl Default for WorkoutInputs {
    fn default() -> Self {
        Self {
            muscles: vec![],
            equipment: vec![Equipment::Bodyweight],
            intensity: Intensity::default(),
            cardio_split: 30,
            duration_minutes: 30,
            style: WorkoutStyle::default(),
            stretching_minutes: 5,
            stretching_only: false,
            notes: None,
        }
    }
}

impl WorkoutInputs {
    /// Check the preconditions a caller has to ensure before generating a plan.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.muscles.is_empty() {
            return Err(InputError::NoMuscles);
        }
        if self.equipment.is_empty() {
            return Err(InputError::NoEquipment);
        }
        if self.cardio_split > 100 {
            return Err(InputError::InvalidSplit(self.cardio_split));
        }
        if !self.stretching_only && self.stretching_minutes > self.duration_minutes {
            return Err(InputError::StretchingExceedsDuration {
                stretching: self.stretching_minutes,
                duration: self.duration_minutes,
            });
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("At least one muscle group must be selected")]
    NoMuscles,
    #[error("At least one piece of equipment must be selected")]
    NoEquipment,
    #[error("Stretching time must not exceed the workout duration ({stretching} > {duration})")]
    StretchingExceedsDuration { stretching: u32, duration: u32 },
    #[error("Cardio split must be between 0 and 100 ({0} > 100)")]
    InvalidSplit(u32),
    #[error("Invalid intensity \"{0}\"")]
    InvalidIntensity(String),
    #[error("Invalid workout style \"{0}\"")]
    InvalidStyle(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Intensity::Easy, 2, 90, 30, 60)]
    #[case(Intensity::Moderate, 3, 60, 30, 60)]
    #[case(Intensity::Hard, 4, 45, 20, 45)]
    #[case(Intensity::Brutal, 5, 30, 15, 30)]
    fn test_intensity_tables(
        #[case] intensity: Intensity,
        #[case] sets: u32,
        #[case] rest: u32,
        #[case] circuit_rest: u32,
        #[case] superset_rest: u32,
    ) {
        assert_eq!(intensity.sets(), sets);
        assert_eq!(intensity.rest_seconds(), rest);
        assert_eq!(intensity.circuit_rest_seconds(), circuit_rest);
        assert_eq!(intensity.superset_rest_seconds(), superset_rest);
    }

    #[rstest]
    #[case(Intensity::Easy, "Easy")]
    #[case(Intensity::Brutal, "Brutal")]
    fn test_intensity_display(#[case] intensity: Intensity, #[case] expected: &str) {
        assert_eq!(intensity.to_string(), expected);
    }

    #[rstest]
    #[case("hard", Ok(Intensity::Hard))]
    #[case("Moderate", Ok(Intensity::Moderate))]
    #[case("extreme", Err(InputError::InvalidIntensity("extreme".to_string())))]
    fn test_intensity_try_from(
        #[case] value: &str,
        #[case] expected: Result<Intensity, InputError>,
    ) {
        assert_eq!(Intensity::try_from(value), expected);
    }

    #[rstest]
    #[case("amrap", Ok(WorkoutStyle::Amrap))]
    #[case("pyramid", Err(InputError::InvalidStyle("pyramid".to_string())))]
    fn test_workout_style_try_from(
        #[case] value: &str,
        #[case] expected: Result<WorkoutStyle, InputError>,
    ) {
        assert_eq!(WorkoutStyle::try_from(value), expected);
    }

    fn inputs() -> WorkoutInputs {
        WorkoutInputs {
            muscles: vec![MuscleGroup::Chest],
            ..WorkoutInputs::default()
        }
    }

    #[rstest]
    #[case::valid(inputs(), Ok(()))]
    #[case::no_muscles(WorkoutInputs::default(), Err(InputError::NoMuscles))]
    #[case::no_equipment(
        WorkoutInputs { equipment: vec![], ..inputs() },
        Err(InputError::NoEquipment)
    )]
    #[case::invalid_split(
        WorkoutInputs { cardio_split: 101, ..inputs() },
        Err(InputError::InvalidSplit(101))
    )]
    #[case::stretching_exceeds_duration(
        WorkoutInputs { stretching_minutes: 31, ..inputs() },
        Err(InputError::StretchingExceedsDuration { stretching: 31, duration: 30 })
    )]
    #[case::stretching_only(
        WorkoutInputs { stretching_minutes: 31, stretching_only: true, ..inputs() },
        Ok(())
    )]
    fn test_workout_inputs_validate(
        #[case] inputs: WorkoutInputs,
        #[case] expected: Result<(), InputError>,
    ) {
        assert_eq!(inputs.validate(), expected);
    }
}
