use std::{fmt, slice::Iter};

use crate::Property;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Glutes,
    Core,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 9] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

impl MuscleGroup {
    /// Broad training category used to spread consecutive circuit exercises over different
    /// parts of the body.
    #[must_use]
    pub fn category(self) -> MuscleCategory {
        match self {
            MuscleGroup::Chest | MuscleGroup::Shoulders | MuscleGroup::Triceps => {
                MuscleCategory::Push
            }
            MuscleGroup::Back | MuscleGroup::Biceps => MuscleCategory::Pull,
            MuscleGroup::Legs | MuscleGroup::Glutes => MuscleCategory::Legs,
            MuscleGroup::Core | MuscleGroup::FullBody => MuscleCategory::Core,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| MuscleGroupError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group \"{0}\"")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleCategory {
    Push,
    Pull,
    Legs,
    Core,
}

impl Property for MuscleCategory {
    fn iter() -> Iter<'static, MuscleCategory> {
        static CATEGORIES: [MuscleCategory; 4] = [
            MuscleCategory::Push,
            MuscleCategory::Pull,
            MuscleCategory::Legs,
            MuscleCategory::Core,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleCategory::Push => "Push",
            MuscleCategory::Pull => "Pull",
            MuscleCategory::Legs => "Legs",
            MuscleCategory::Core => "Core",
        }
    }
}
