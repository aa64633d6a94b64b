use std::{fmt, slice::Iter};

use crate::{Exercise, ExerciseType, MuscleGroup, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbell,
    Kettlebell,
    ResistanceBands,
    PullUpBar,
    Bench,
    CableMachine,
    SmithMachine,
    LegPressMachine,
    LegCurlMachine,
    LegExtensionMachine,
    LatPulldownMachine,
    SeatedRowMachine,
    ChestPressMachine,
    ShoulderPressMachine,
    PecDeckMachine,
    HackSquatMachine,
    CalfRaiseMachine,
    BackExtensionMachine,
    WeightPlate,
    MedicineBall,
    BattleRopes,
    Sled,
    // Cardio
    Treadmill,
    StationaryBike,
    RowingMachine,
    Elliptical,
    StairClimber,
    JumpRope,
    AssaultBike,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 31] = [
            Equipment::Bodyweight,
            Equipment::Dumbbells,
            Equipment::Barbell,
            Equipment::Kettlebell,
            Equipment::ResistanceBands,
            Equipment::PullUpBar,
            Equipment::Bench,
            Equipment::CableMachine,
            Equipment::SmithMachine,
            Equipment::LegPressMachine,
            Equipment::LegCurlMachine,
            Equipment::LegExtensionMachine,
            Equipment::LatPulldownMachine,
            Equipment::SeatedRowMachine,
            Equipment::ChestPressMachine,
            Equipment::ShoulderPressMachine,
            Equipment::PecDeckMachine,
            Equipment::HackSquatMachine,
            Equipment::CalfRaiseMachine,
            Equipment::BackExtensionMachine,
            Equipment::WeightPlate,
            Equipment::MedicineBall,
            Equipment::BattleRopes,
            Equipment::Sled,
            Equipment::Treadmill,
            Equipment::StationaryBike,
            Equipment::RowingMachine,
            Equipment::Elliptical,
            Equipment::StairClimber,
            Equipment::JumpRope,
            Equipment::AssaultBike,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbell => "Barbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBands => "Resistance bands",
            Equipment::PullUpBar => "Pull-up bar",
            Equipment::Bench => "Bench",
            Equipment::CableMachine => "Cable machine",
            Equipment::SmithMachine => "Smith machine",
            Equipment::LegPressMachine => "Leg press machine",
            Equipment::LegCurlMachine => "Leg curl machine",
            Equipment::LegExtensionMachine => "Leg extension machine",
            Equipment::LatPulldownMachine => "Lat pulldown machine",
            Equipment::SeatedRowMachine => "Seated row machine",
            Equipment::ChestPressMachine => "Chest press machine",
            Equipment::ShoulderPressMachine => "Shoulder press machine",
            Equipment::PecDeckMachine => "Pec deck machine",
            Equipment::HackSquatMachine => "Hack squat machine",
            Equipment::CalfRaiseMachine => "Calf raise machine",
            Equipment::BackExtensionMachine => "Back extension machine",
            Equipment::WeightPlate => "Weight plate",
            Equipment::MedicineBall => "Medicine ball",
            Equipment::BattleRopes => "Battle ropes",
            Equipment::Sled => "Sled",
            Equipment::Treadmill => "Treadmill",
            Equipment::StationaryBike => "Stationary bike",
            Equipment::RowingMachine => "Rowing machine",
            Equipment::Elliptical => "Elliptical",
            Equipment::StairClimber => "Stair climber",
            Equipment::JumpRope => "Jump rope",
            Equipment::AssaultBike => "Assault bike",
        }
    }
}

impl Equipment {
    #[must_use]
    pub fn is_cardio(self) -> bool {
        matches!(
            self,
            Equipment::Treadmill
                | Equipment::StationaryBike
                | Equipment::RowingMachine
                | Equipment::Elliptical
                | Equipment::StairClimber
                | Equipment::JumpRope
                | Equipment::AssaultBike
        )
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Equipment::iter()
            .find(|e| e.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| EquipmentError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("Invalid equipment \"{0}\"")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Location {
    Home,
    Gym,
    Hotel,
    Outdoors,
}

impl Property for Location {
    fn iter() -> Iter<'static, Location> {
        static LOCATIONS: [Location; 4] = [
            Location::Home,
            Location::Gym,
            Location::Hotel,
            Location::Outdoors,
        ];
        LOCATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Location::Home => "Home",
            Location::Gym => "Gym",
            Location::Hotel => "Hotel",
            Location::Outdoors => "Outdoors",
        }
    }
}

impl Location {
    /// Equipment typically available at the location.
    #[must_use]
    pub fn equipment(self) -> &'static [Equipment] {
        match self {
            Location::Home => &[
                Equipment::Bodyweight,
                Equipment::Dumbbells,
                Equipment::ResistanceBands,
                Equipment::Bench,
            ],
            Location::Gym => &[
                Equipment::Bodyweight,
                Equipment::Dumbbells,
                Equipment::Barbell,
                Equipment::Bench,
                Equipment::CableMachine,
                Equipment::LegPressMachine,
                Equipment::LatPulldownMachine,
                Equipment::SeatedRowMachine,
                Equipment::ChestPressMachine,
                Equipment::Treadmill,
                Equipment::StationaryBike,
                Equipment::RowingMachine,
            ],
            Location::Hotel => &[
                Equipment::Bodyweight,
                Equipment::Dumbbells,
                Equipment::Treadmill,
                Equipment::StationaryBike,
            ],
            Location::Outdoors => &[Equipment::Bodyweight, Equipment::JumpRope],
        }
    }
}

/// Reduce the catalog to the exercises that can be performed with the given equipment.
///
/// Bodyweight exercises are always eligible. If bodyweight is the only available equipment,
/// exercises which additionally need any apparatus are excluded.
#[must_use]
pub fn filter_by_equipment<'a>(
    catalog: &'a [Exercise],
    user_equipment: &[Equipment],
) -> Vec<&'a Exercise> {
    if user_equipment == [Equipment::Bodyweight] {
        return catalog
            .iter()
            .filter(|e| e.equipment.is_empty() || e.equipment == [Equipment::Bodyweight])
            .collect();
    }

    catalog
        .iter()
        .filter(|e| {
            e.equipment.is_empty()
                || e.equipment.contains(&Equipment::Bodyweight)
                || e.equipment.iter().all(|eq| user_equipment.contains(eq))
        })
        .collect()
}

/// Equipment worth offering for the given muscle selection.
///
/// Contains the weight equipment used by weight exercises for any of the muscles, bodyweight
/// and all cardio equipment, in canonical order.
#[must_use]
pub fn relevant_equipment(muscles: &[MuscleGroup], catalog: &[Exercise]) -> Vec<Equipment> {
    if muscles.is_empty() {
        return Equipment::iter().copied().collect();
    }

    let used = catalog
        .iter()
        .filter(|e| e.kind == ExerciseType::Weights && e.targets_any(muscles))
        .flat_map(|e| e.equipment.iter().copied())
        .collect::<Vec<_>>();

    Equipment::iter()
        .filter(|e| **e == Equipment::Bodyweight || e.is_cardio() || used.contains(e))
        .copied()
        .collect()
}
