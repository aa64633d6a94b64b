use std::fmt;

use crate::{
    Equipment, Exercise, ExerciseID, ExerciseType, MuscleGroup, WorkoutStyle,
    filter_by_equipment, stretching::stretch_target,
};

/// Prefix marking the first exercise of a superset pair.
pub const SUPERSET_MARKER: &str = "🔗 ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub summary: Summary,
    pub stretching: WorkoutSection,
    pub main: WorkoutSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub muscles: String,
    pub equipment: String,
    pub intensity: String,
    pub cardio_percent: u32,
    pub weights_percent: u32,
    pub style: WorkoutStyle,
    pub stretching_minutes: u32,
    pub stretching_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutSection {
    pub title: String,
    pub items: Vec<WorkoutItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Stretching,
    Main,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutItem {
    pub name: String,
    pub sets: u32,
    pub target: String,
    pub rest_seconds: Option<u32>,
    pub video: String,
    pub instructions: Vec<String>,
    pub image: Option<String>,
    pub circuit: Option<Circuit>,
    pub muscles: Vec<MuscleGroup>,
    pub exercise_id: Option<ExerciseID>,
}

/// Group of items performed back to back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Circuit {
    pub id: String,
    /// Number of rounds, zero meaning as many as possible.
    pub rounds: u32,
}

impl WorkoutItem {
    #[must_use]
    pub fn new(exercise: &Exercise, sets: u32, target: String, rest_seconds: Option<u32>) -> Self {
        Self {
            name: exercise.name.clone(),
            sets,
            target,
            rest_seconds,
            video: exercise.video.clone(),
            instructions: exercise.instructions.clone(),
            image: exercise.image.clone(),
            circuit: None,
            muscles: exercise.muscles.clone(),
            exercise_id: Some(exercise.id.clone()),
        }
    }

    #[must_use]
    pub fn in_circuit(mut self, id: &str, rounds: u32) -> Self {
        self.circuit = Some(Circuit {
            id: id.to_string(),
            rounds,
        });
        self
    }

    #[must_use]
    pub fn is_superset_start(&self) -> bool {
        self.name.starts_with(SUPERSET_MARKER)
    }
}

impl WorkoutPlan {
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> &WorkoutSection {
        match kind {
            SectionKind::Stretching => &self.stretching,
            SectionKind::Main => &self.main,
        }
    }

    fn section_mut(&mut self, kind: SectionKind) -> &mut WorkoutSection {
        match kind {
            SectionKind::Stretching => &mut self.stretching,
            SectionKind::Main => &mut self.main,
        }
    }

    /// Replace an item by one built from another exercise.
    ///
    /// The new item keeps the sets, rest, circuit membership and superset marker of the replaced
    /// item. Returns `None` if there is no item at the index.
    #[must_use]
    pub fn swap_exercise(
        &self,
        section: SectionKind,
        index: usize,
        exercise: &Exercise,
    ) -> Option<WorkoutPlan> {
        let old = self.section(section).items.get(index)?;

        let target = match (section, exercise.kind) {
            (SectionKind::Stretching, _) => stretch_target(exercise, old.sets),
            (SectionKind::Main, ExerciseType::Weights) => {
                format!("{} reps", exercise.default_target)
            }
            (SectionKind::Main, _) => exercise.default_target.clone(),
        };
        let mut item = WorkoutItem::new(exercise, old.sets, target, old.rest_seconds);
        item.circuit.clone_from(&old.circuit);
        if old.is_superset_start() {
            item.name = format!("{SUPERSET_MARKER}{}", item.name);
        }

        let mut plan = self.clone();
        plan.section_mut(section).items[index] = item;
        Some(plan)
    }
}

/// Exercises that could replace the item.
///
/// Candidates have the same type as the replaced exercise, share one of its muscles (any cardio
/// exercise for cardio), are doable with the equipment and differ from the replaced exercise.
#[must_use]
pub fn swap_candidates<'a>(
    item: &WorkoutItem,
    catalog: &'a [Exercise],
    equipment: &[Equipment],
) -> Vec<&'a Exercise> {
    let Some(current) = item
        .exercise_id
        .as_ref()
        .and_then(|id| catalog.iter().find(|e| e.id == *id))
    else {
        return vec![];
    };

    filter_by_equipment(catalog, equipment)
        .into_iter()
        .filter(|e| {
            e.id != current.id
                && e.kind == current.kind
                && (e.kind == ExerciseType::Cardio || e.targets_any(&current.muscles))
        })
        .collect()
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.summary.title)?;
        writeln!(f)?;
        writeln!(f, "Muscles: {}", self.summary.muscles)?;
        writeln!(f, "Equipment: {}", self.summary.equipment)?;
        writeln!(f, "Intensity: {}", self.summary.intensity)?;
        writeln!(
            f,
            "Split: Cardio {}% / Weights {}%",
            self.summary.cardio_percent, self.summary.weights_percent
        )?;
        writeln!(f)?;
        write!(f, "{}", self.stretching)?;
        writeln!(f)?;
        write!(f, "{}", self.main)
    }
}

impl fmt::Display for WorkoutSection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "-".repeat(self.title.chars().count()))?;
        for (i, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, item.name)?;
            if item.sets > 1 {
                writeln!(f, "   {} sets × {}", item.sets, item.target)?;
            } else {
                writeln!(f, "   {}", item.target)?;
            }
            if let Some(rest) = item.rest_seconds.filter(|r| *r > 0) {
                writeln!(f, "   Rest: {rest}s")?;
            }
            writeln!(f, "   YouTube: {}", item.video)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::exercise;

    fn item(name: &str, sets: u32, target: &str, rest_seconds: Option<u32>) -> WorkoutItem {
        let mut e = exercise(name, ExerciseType::Weights, &[MuscleGroup::Chest], &[]);
        e.video = format!("https://youtu.be/{name}");
        WorkoutItem::new(&e, sets, target.to_string(), rest_seconds)
    }

    fn plan() -> WorkoutPlan {
        WorkoutPlan {
            summary: Summary {
                title: "Your 30-minute workout".to_string(),
                muscles: "Chest, Back".to_string(),
                equipment: "Bodyweight".to_string(),
                intensity: "Moderate".to_string(),
                cardio_percent: 30,
                weights_percent: 70,
                style: WorkoutStyle::Traditional,
                stretching_minutes: 5,
                stretching_only: false,
            },
            stretching: WorkoutSection {
                title: "Stretching (5 min)".to_string(),
                items: vec![item("chest-stretch", 1, "30s each side", None)],
            },
            main: WorkoutSection {
                title: "Main Workout (25 min)".to_string(),
                items: vec![
                    item("push-up", 3, "8-12 reps", Some(60)),
                    item("jumping-jacks", 1, "60s", Some(0)),
                ],
            },
        }
    }

    #[test]
    fn test_workout_plan_display() {
        assert_eq!(
            plan().to_string(),
            "Your 30-minute workout\n\
             \n\
             Muscles: Chest, Back\n\
             Equipment: Bodyweight\n\
             Intensity: Moderate\n\
             Split: Cardio 30% / Weights 70%\n\
             \n\
             Stretching (5 min)\n\
             ------------------\n\
             1. chest-stretch\n   \
             30s each side\n   \
             YouTube: https://youtu.be/chest-stretch\n\
             \n\
             \n\
             Main Workout (25 min)\n\
             ---------------------\n\
             1. push-up\n   \
             3 sets × 8-12 reps\n   \
             Rest: 60s\n   \
             YouTube: https://youtu.be/push-up\n\
             \n\
             2. jumping-jacks\n   \
             60s\n   \
             YouTube: https://youtu.be/jumping-jacks\n\
             \n"
        );
    }

    #[test]
    fn test_workout_section_display_empty() {
        let section = WorkoutSection {
            title: "Main Workout (0 min)".to_string(),
            items: vec![],
        };
        assert_eq!(section.to_string(), "Main Workout (0 min)\n--------------------\n");
    }

    #[test]
    fn test_workout_item_in_circuit() {
        let item = item("push-up", 1, "8-12 reps", Some(30)).in_circuit("circuit-1", 3);
        assert_eq!(
            item.circuit,
            Some(Circuit {
                id: "circuit-1".to_string(),
                rounds: 3
            })
        );
        assert_eq!(item.exercise_id, Some(ExerciseID::from("push-up")));
        assert_eq!(item.muscles, vec![MuscleGroup::Chest]);
    }

    #[rstest]
    #[case(SectionKind::Main, 0, "dip", "8-10 reps")]
    #[case(SectionKind::Main, 1, "dip", "8-10 reps")]
    #[case(SectionKind::Stretching, 0, "dip", "30s each side")]
    fn test_workout_plan_swap_exercise(
        #[case] section: SectionKind,
        #[case] index: usize,
        #[case] name: &str,
        #[case] target: &str,
    ) {
        let mut dip = exercise(name, ExerciseType::Weights, &[MuscleGroup::Triceps], &[]);
        dip.default_target = "8-10".to_string();
        let plan = plan();

        let swapped = plan.swap_exercise(section, index, &dip).unwrap();

        let old = &plan.section(section).items[index];
        let new = &swapped.section(section).items[index];
        assert_eq!(new.name, name);
        assert_eq!(new.target, target);
        assert_eq!(new.sets, old.sets);
        assert_eq!(new.rest_seconds, old.rest_seconds);
        assert_eq!(new.exercise_id, Some(ExerciseID::from(name)));
        assert_eq!(swapped.summary, plan.summary);
        assert_eq!(
            swapped.section(section).items.len(),
            plan.section(section).items.len()
        );
    }

    #[test]
    fn test_workout_plan_swap_exercise_keeps_circuit_and_marker() {
        let mut plan = plan();
        plan.main.items[0] = item("push-up", 1, "8-12 reps", Some(0)).in_circuit("amrap-round", 0);
        plan.main.items[0].name = format!("{SUPERSET_MARKER}push-up");
        let dip = exercise("dip", ExerciseType::Weights, &[MuscleGroup::Triceps], &[]);

        let swapped = plan.swap_exercise(SectionKind::Main, 0, &dip).unwrap();

        assert_eq!(swapped.main.items[0].name, "🔗 dip");
        assert_eq!(swapped.main.items[0].circuit, plan.main.items[0].circuit);
    }

    #[test]
    fn test_workout_plan_swap_exercise_out_of_range() {
        let dip = exercise("dip", ExerciseType::Weights, &[MuscleGroup::Triceps], &[]);
        assert_eq!(plan().swap_exercise(SectionKind::Stretching, 1, &dip), None);
    }

    #[test]
    fn test_swap_candidates() {
        let catalog = vec![
            exercise("push-up", ExerciseType::Weights, &[MuscleGroup::Chest], &[]),
            exercise(
                "bench-press",
                ExerciseType::Weights,
                &[MuscleGroup::Chest],
                &[Equipment::Barbell],
            ),
            exercise("dip", ExerciseType::Weights, &[MuscleGroup::Chest, MuscleGroup::Triceps], &[]),
            exercise("row", ExerciseType::Weights, &[MuscleGroup::Back], &[]),
            exercise("chest-stretch", ExerciseType::Mobility, &[MuscleGroup::Chest], &[]),
            exercise("run", ExerciseType::Cardio, &[], &[Equipment::Treadmill]),
            exercise("jump-rope", ExerciseType::Cardio, &[], &[Equipment::JumpRope]),
        ];
        let names = |exercises: Vec<&Exercise>| {
            exercises
                .iter()
                .map(|e| e.name.clone())
                .collect::<Vec<_>>()
        };

        let push_up = WorkoutItem::new(&catalog[0], 3, "8-12 reps".to_string(), Some(60));
        assert_eq!(
            names(swap_candidates(&push_up, &catalog, &[Equipment::Bodyweight])),
            vec!["dip"]
        );
        assert_eq!(
            names(swap_candidates(
                &push_up,
                &catalog,
                &[Equipment::Bodyweight, Equipment::Barbell]
            )),
            vec!["bench-press", "dip"]
        );

        let run = WorkoutItem::new(&catalog[5], 1, "20 min".to_string(), Some(60));
        assert_eq!(
            names(swap_candidates(
                &run,
                &catalog,
                &[Equipment::Treadmill, Equipment::JumpRope]
            )),
            vec!["jump-rope"]
        );

        let unknown = WorkoutItem {
            exercise_id: None,
            ..push_up
        };
        assert!(swap_candidates(&unknown, &catalog, &[Equipment::Bodyweight]).is_empty());
    }
}
