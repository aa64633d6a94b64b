use std::{collections::HashSet, fmt, slice::Iter};

use derive_more::{AsRef, Display};

use crate::{Equipment, MuscleGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub muscles: Vec<MuscleGroup>,
    pub equipment: Vec<Equipment>,
    pub kind: ExerciseType,
    pub difficulty: Difficulty,
    pub default_target: String,
    pub video: String,
    pub instructions: Vec<String>,
    pub image: Option<String>,
    pub unilateral: bool,
}

impl Exercise {
    #[must_use]
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.muscles.contains(&muscle)
    }

    #[must_use]
    pub fn targets_any(&self, muscles: &[MuscleGroup]) -> bool {
        self.muscles.iter().any(|m| muscles.contains(m))
    }

    /// Whether the default target describes a hold, e.g. "30s", "45 sec" or "5 each side".
    #[must_use]
    pub fn has_hold_target(&self) -> bool {
        self.default_target.contains('s')
    }

    /// Whether the exercise is held, as stretches are.
    #[must_use]
    pub fn is_hold(&self) -> bool {
        self.name.to_lowercase().contains("stretch") || self.has_hold_target()
    }
}

#[derive(AsRef, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExerciseType {
    Weights,
    Cardio,
    Mobility,
}

impl Property for ExerciseType {
    fn iter() -> Iter<'static, ExerciseType> {
        static TYPES: [ExerciseType; 3] = [
            ExerciseType::Weights,
            ExerciseType::Cardio,
            ExerciseType::Mobility,
        ];
        TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseType::Weights => "weights",
            ExerciseType::Cardio => "cardio",
            ExerciseType::Mobility => "mobility",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Filter for browsing the exercises whose performance can be logged.
#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub query: String,
    pub muscles: HashSet<MuscleGroup>,
    pub equipment: HashSet<Equipment>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(&self, exercises: impl Iterator<Item = &'a Exercise>) -> Vec<&'a Exercise> {
        let query = self.query.trim().to_lowercase();
        exercises
            .filter(|e| {
                matches!(e.kind, ExerciseType::Weights | ExerciseType::Cardio)
                    && (query.is_empty()
                        || e.name.to_lowercase().contains(&query)
                        || e.muscles
                            .iter()
                            .any(|m| m.to_string().to_lowercase().contains(&query)))
                    && (self.muscles.is_empty()
                        || e.muscles.iter().any(|m| self.muscles.contains(m)))
                    && (self.equipment.is_empty()
                        || e.equipment.iter().any(|eq| self.equipment.contains(eq))
                        || (e.equipment.is_empty()
                            && self.equipment.contains(&Equipment::Bodyweight)))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.muscles.is_empty() && self.equipment.is_empty()
    }

    #[must_use]
    pub fn muscle_list(&self) -> Vec<(MuscleGroup, bool)> {
        MuscleGroup::iter()
            .map(|m| (*m, self.muscles.contains(m)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn equipment_list(&self) -> Vec<(Equipment, bool)> {
        Equipment::iter()
            .map(|e| (*e, self.equipment.contains(e)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_muscle(&mut self, muscle: MuscleGroup) {
        if self.muscles.contains(&muscle) {
            self.muscles.remove(&muscle);
        } else {
            self.muscles.insert(muscle);
        }
    }

    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        if self.equipment.contains(&equipment) {
            self.equipment.remove(&equipment);
        } else {
            self.equipment.insert(equipment);
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.muscles.clear();
        self.equipment.clear();
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::exercise;

    #[rstest]
    #[case("30s each side", true)]
    #[case("45 sec", true)]
    #[case("5 each side", true)]
    #[case("10 reps", true)]
    #[case("8-12", false)]
    #[case("10 each direction", false)]
    #[case("", false)]
    fn test_exercise_has_hold_target(#[case] target: &str, #[case] expected: bool) {
        let mut e = exercise("a", ExerciseType::Mobility, &[MuscleGroup::Back], &[]);
        e.default_target = target.to_string();
        assert_eq!(e.has_hold_target(), expected);
    }

    #[test]
    fn test_exercise_is_hold() {
        let mut stretch = exercise("a", ExerciseType::Mobility, &[MuscleGroup::Chest], &[]);
        stretch.name = "Doorway Chest Stretch".to_string();
        stretch.default_target = "8-12".to_string();
        assert!(stretch.is_hold());

        let mut hold = exercise("b", ExerciseType::Mobility, &[MuscleGroup::Back], &[]);
        hold.name = "Child's Pose".to_string();
        hold.default_target = "45s".to_string();
        assert!(hold.is_hold());

        let mut circles = exercise("c", ExerciseType::Mobility, &[MuscleGroup::Shoulders], &[]);
        circles.name = "Arm Circles".to_string();
        circles.default_target = "10 each direction".to_string();
        assert!(!circles.is_hold());
    }

    #[test]
    fn test_exercise_targets() {
        let e = exercise(
            "a",
            ExerciseType::Weights,
            &[MuscleGroup::Chest, MuscleGroup::Triceps],
            &[],
        );
        assert!(e.targets(MuscleGroup::Triceps));
        assert!(!e.targets(MuscleGroup::Back));
        assert!(e.targets_any(&[MuscleGroup::Back, MuscleGroup::Chest]));
        assert!(!e.targets_any(&[]));
    }

    #[test]
    fn test_exercise_type_name() {
        let names = ExerciseType::iter().map(|t| t.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["weights", "cardio", "mobility"]);
    }

    #[test]
    fn test_difficulty_name() {
        let names = Difficulty::iter().map(|d| d.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["beginner", "intermediate", "advanced"]);
    }

    fn browser_exercises() -> Vec<Exercise> {
        let mut squat = exercise("squat", ExerciseType::Weights, &[MuscleGroup::Legs], &[]);
        squat.name = "Bodyweight Squat".to_string();
        let mut row = exercise(
            "row",
            ExerciseType::Weights,
            &[MuscleGroup::Back],
            &[Equipment::Dumbbells],
        );
        row.name = "Dumbbell Row".to_string();
        let mut bike = exercise("bike", ExerciseType::Cardio, &[], &[Equipment::StationaryBike]);
        bike.name = "Bike Intervals".to_string();
        let mut stretch = exercise("stretch", ExerciseType::Mobility, &[MuscleGroup::Back], &[]);
        stretch.name = "Cat Cow Stretch".to_string();
        vec![squat, row, bike, stretch]
    }

    #[rstest]
    #[case::empty(ExerciseFilter::default(), &["squat", "row", "bike"])]
    #[case::name(
        ExerciseFilter { query: "ROW".into(), ..ExerciseFilter::default() },
        &["row"]
    )]
    #[case::muscle_name(
        ExerciseFilter { query: "legs".into(), ..ExerciseFilter::default() },
        &["squat"]
    )]
    #[case::muscles(
        ExerciseFilter { muscles: [MuscleGroup::Back].into(), ..ExerciseFilter::default() },
        &["row"]
    )]
    #[case::bodyweight(
        ExerciseFilter { equipment: [Equipment::Bodyweight].into(), ..ExerciseFilter::default() },
        &["squat"]
    )]
    #[case::equipment(
        ExerciseFilter { equipment: [Equipment::Dumbbells, Equipment::StationaryBike].into(), ..ExerciseFilter::default() },
        &["row", "bike"]
    )]
    fn test_exercise_filter_exercises(#[case] filter: ExerciseFilter, #[case] expected: &[&str]) {
        let exercises = browser_exercises();

        assert_eq!(
            filter
                .exercises(exercises.iter())
                .iter()
                .map(|e| e.id.as_ref().clone())
                .collect::<Vec<String>>(),
            expected.iter().map(ToString::to_string).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_exercise_filter_toggle() {
        let mut filter = ExerciseFilter::default();

        assert!(filter.is_empty());
        assert!(filter.muscle_list().iter().all(|(_, b)| !b));

        filter.toggle_muscle(MuscleGroup::Core);
        filter.toggle_equipment(Equipment::Kettlebell);

        assert!(!filter.is_empty());
        assert!(filter.muscle_list().contains(&(MuscleGroup::Core, true)));
        assert!(filter.equipment_list().contains(&(Equipment::Kettlebell, true)));

        filter.toggle_muscle(MuscleGroup::Core);

        assert!(filter.muscle_list().iter().all(|(_, b)| !b));

        filter.clear();

        assert!(filter.is_empty());
    }
}
