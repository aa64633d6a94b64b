use std::sync::LazyLock;

use crate::{Difficulty, Equipment, Exercise, ExerciseID, ExerciseType, MuscleGroup};

/// All exercises known to the generator, sorted by name.
pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    let mut exercises = BASE_EXERCISES
        .iter()
        .map(BaseExercise::exercise)
        .chain(
            BASE_EXERCISES
                .iter()
                .flat_map(|e| e.variants.iter().map(|v| e.variant(v))),
        )
        .collect::<Vec<Exercise>>();
    exercises.sort_by(|a, b| a.name.cmp(&b.name));
    exercises
});

#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

#[must_use]
pub fn exercise(id: &ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == *id)
}

struct BaseExercise {
    name: &'static str,
    muscles: &'static [MuscleGroup],
    equipment: &'static [Equipment],
    kind: ExerciseType,
    difficulty: Difficulty,
    target: &'static str,
    unilateral: bool,
    instructions: &'static [&'static str],
    variants: &'static [ExerciseVariant],
}

impl BaseExercise {
    fn exercise(&self) -> Exercise {
        Exercise {
            id: ExerciseID::new(&slug(self.name)),
            name: self.name.to_string(),
            muscles: self.muscles.to_vec(),
            equipment: self.equipment.to_vec(),
            kind: self.kind,
            difficulty: self.difficulty,
            default_target: self.target.to_string(),
            video: video(self.name),
            instructions: self.instructions.iter().map(ToString::to_string).collect(),
            image: None,
            unilateral: self.unilateral,
        }
    }

    fn variant(&self, variant: &ExerciseVariant) -> Exercise {
        Exercise {
            id: ExerciseID::new(&slug(variant.name)),
            name: variant.name.to_string(),
            equipment: variant.equipment.unwrap_or(self.equipment).to_vec(),
            difficulty: variant.difficulty.unwrap_or(self.difficulty),
            default_target: variant.target.unwrap_or(self.target).to_string(),
            video: video(variant.name),
            unilateral: variant.unilateral.unwrap_or(self.unilateral),
            ..self.exercise()
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ExerciseVariant {
    name: &'static str,
    equipment: Option<&'static [Equipment]>,
    target: Option<&'static str>,
    difficulty: Option<Difficulty>,
    unilateral: Option<bool>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            equipment: None,
            target: None,
            difficulty: None,
            unilateral: None,
        }
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c == ' ' || c == '-')
        .map(|word| word.chars().filter(char::is_ascii_alphanumeric).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn video(name: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}+tutorial",
        name.split_whitespace()
            .map(|word| word.replace('\'', ""))
            .collect::<Vec<_>>()
            .join("+")
    )
}

const BASE_EXERCISES: [BaseExercise; 85] = [
    BaseExercise {
        name: "Arm Circles",
        muscles: &[MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "10 each direction",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Arnold Press",
        muscles: &[MuscleGroup::Shoulders],
        equipment: &[Equipment::Dumbbells],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[
            "Start with the dumbbells in front of the shoulders, palms facing you",
            "Rotate the palms outward while pressing overhead",
            "Reverse the rotation on the way down",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Assault Bike Intervals",
        muscles: &[MuscleGroup::FullBody],
        equipment: &[Equipment::AssaultBike],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Advanced,
        target: "10-15 min",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Back Extension",
        muscles: &[MuscleGroup::Back, MuscleGroup::Glutes],
        equipment: &[Equipment::BackExtensionMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Band Pull-Apart",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &[Equipment::ResistanceBands],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "12-15",
        unilateral: false,
        instructions: &[
            "Hold the band at shoulder height with straight arms",
            "Pull the band apart until it touches the chest",
            "Squeeze the shoulder blades together",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Back Squat",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "6-10",
        unilateral: false,
        instructions: &[
            "Rest the bar on the upper back",
            "Sit down and back until the thighs are parallel to the floor",
            "Drive up through the whole foot",
        ],
        variants: &[
            ExerciseVariant {
                name: "Smith Machine Squat",
                equipment: Some(&[Equipment::SmithMachine]),
                target: Some("8-12"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Bench Press",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "6-10",
        unilateral: false,
        instructions: &[
            "Lie on the bench with the eyes under the bar",
            "Lower the bar to the mid chest with control",
            "Press up until the arms are extended",
        ],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Bench Press",
                equipment: Some(&[Equipment::Dumbbells, Equipment::Bench]),
                target: Some("8-12"),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Chest Press",
                equipment: Some(&[Equipment::ChestPressMachine]),
                target: Some("10-12"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Chest Press",
                equipment: Some(&[Equipment::ResistanceBands]),
                target: Some("12-15"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Curl",
        muscles: &[MuscleGroup::Biceps],
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "8-12",
        unilateral: false,
        instructions: &[
            "Keep the elbows close to the body",
            "Curl the weight up without swinging",
            "Lower with control",
        ],
        variants: &[
            ExerciseVariant {
                name: "Cable Curl",
                equipment: Some(&[Equipment::CableMachine]),
                target: Some("10-12"),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Curl",
                equipment: Some(&[Equipment::Dumbbells]),
                target: Some("10-12"),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Curl",
                equipment: Some(&[Equipment::ResistanceBands]),
                target: Some("12-15"),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Deadlift",
        muscles: &[MuscleGroup::Back, MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Advanced,
        target: "5-8",
        unilateral: false,
        instructions: &[
            "Stand with the bar over the mid foot",
            "Brace the core and keep the back neutral",
            "Push the floor away until standing tall",
        ],
        variants: &[
            ExerciseVariant {
                name: "Kettlebell Deadlift",
                equipment: Some(&[Equipment::Kettlebell]),
                target: Some("10-12"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Hip Thrust",
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Legs],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Hip Thrust",
                equipment: Some(&[Equipment::Dumbbells, Equipment::Bench]),
                target: Some("10-12"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Overhead Press",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "6-10",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Shoulder Press",
                equipment: Some(&[Equipment::Dumbbells]),
                target: Some("8-12"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shoulder Press",
                equipment: Some(&[Equipment::ShoulderPressMachine]),
                target: Some("10-12"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Romanian Deadlift",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::Back],
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-10",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Romanian Deadlift",
                equipment: Some(&[Equipment::Dumbbells]),
                target: Some("8-12"),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Row",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-10",
        unilateral: false,
        instructions: &[
            "Hinge forward with a flat back",
            "Pull the bar to the lower ribs",
            "Lower with control",
        ],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Row",
                equipment: Some(&[Equipment::Dumbbells, Equipment::Bench]),
                target: Some("8-12"),
                difficulty: Some(Difficulty::Beginner),
                unilateral: Some(true),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Row",
                equipment: Some(&[Equipment::ResistanceBands]),
                target: Some("12-15"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Battle Rope Slams",
        muscles: &[MuscleGroup::FullBody, MuscleGroup::Shoulders],
        equipment: &[Equipment::BattleRopes],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "15-20",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Bear Crawl",
        muscles: &[MuscleGroup::FullBody, MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "10-20",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Bench Dip",
        muscles: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        equipment: &[Equipment::Bodyweight, Equipment::Bench],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[
            "Place the hands on the edge of the bench",
            "Lower until the elbows are bent to 90 degrees",
            "Press back up",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Bicycle Crunch",
        muscles: &[MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "15-20",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Bodyweight Squat",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "15-20",
        unilateral: false,
        instructions: &[
            "Stand with the feet shoulder-width apart",
            "Sit back until the thighs are parallel to the floor",
            "Stand up through the heels",
        ],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Goblet Squat",
                equipment: Some(&[Equipment::Dumbbells]),
                target: Some("10-12"),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Goblet Squat",
                equipment: Some(&[Equipment::Kettlebell]),
                target: Some("10-12"),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Bulgarian Split Squat",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[Equipment::Bench],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: true,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Bulgarian Split Squat",
                equipment: Some(&[Equipment::Dumbbells, Equipment::Bench]),
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Burpee",
        muscles: &[MuscleGroup::FullBody],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[
            "Drop into a squat and place the hands on the floor",
            "Jump the feet back into a plank",
            "Return the feet and jump up",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Cable Chest Fly",
        muscles: &[MuscleGroup::Chest],
        equipment: &[Equipment::CableMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Fly",
                equipment: Some(&[Equipment::Dumbbells, Equipment::Bench]),
                target: Some("10-12"),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pec Deck Fly",
                equipment: Some(&[Equipment::PecDeckMachine]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Face Pull",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &[Equipment::CableMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "12-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Cable Triceps Pushdown",
        muscles: &[MuscleGroup::Triceps],
        equipment: &[Equipment::CableMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Resistance Band Pushdown",
                equipment: Some(&[Equipment::ResistanceBands]),
                target: Some("12-15"),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Calf Raise",
        muscles: &[MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "15-20",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Machine Calf Raise",
                equipment: Some(&[Equipment::CalfRaiseMachine]),
                target: Some("12-15"),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Calf Stretch",
        muscles: &[MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Cat-Cow",
        muscles: &[MuscleGroup::Back, MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "10 reps",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Child's Pose",
        muscles: &[MuscleGroup::Back, MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "45s",
        unilateral: false,
        instructions: &[
            "Kneel and sit back on the heels",
            "Reach the arms forward on the floor",
            "Breathe deeply into the back",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Chin-Up",
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Back],
        equipment: &[Equipment::PullUpBar],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "5-10",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Cobra Stretch",
        muscles: &[MuscleGroup::Core, MuscleGroup::Chest],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Cross-Body Shoulder Stretch",
        muscles: &[MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Crunch",
        muscles: &[MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "15-20",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Dead Bug",
        muscles: &[MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "8-12",
        unilateral: false,
        instructions: &[
            "Lie on the back with arms and knees raised",
            "Extend the opposite arm and leg while keeping the lower back flat",
            "Return and switch sides",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Decline Push-Up",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Diamond Push-Up",
        muscles: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Donkey Kick",
        muscles: &[MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "12-15",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Doorway Chest Stretch",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: false,
        instructions: &[
            "Place the forearms on the door frame",
            "Step forward until a stretch is felt across the chest",
            "Keep the shoulders down",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Downward Dog",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Dumbbell Lateral Raise",
        muscles: &[MuscleGroup::Shoulders],
        equipment: &[Equipment::Dumbbells],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "12-15",
        unilateral: false,
        instructions: &[
            "Raise the arms out to the sides up to shoulder height",
            "Lead with the elbows",
            "Lower slowly",
        ],
        variants: &[
            ExerciseVariant {
                name: "Cable Lateral Raise",
                equipment: Some(&[Equipment::CableMachine]),
                difficulty: Some(Difficulty::Intermediate),
                unilateral: Some(true),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Overhead Triceps Extension",
        muscles: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Dumbbells],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Elliptical",
        muscles: &[MuscleGroup::Legs, MuscleGroup::FullBody],
        equipment: &[Equipment::Elliptical],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Beginner,
        target: "20-30 min",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Figure-Four Stretch",
        muscles: &[MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Glute Bridge",
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "12-15",
        unilateral: false,
        instructions: &[
            "Lie on the back with the knees bent",
            "Drive the hips up by squeezing the glutes",
            "Lower with control",
        ],
        variants: &[
            ExerciseVariant {
                name: "Single-Leg Glute Bridge",
                target: Some("8-12"),
                difficulty: Some(Difficulty::Intermediate),
                unilateral: Some(true),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Hack Squat",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[Equipment::HackSquatMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Hammer Curl",
        muscles: &[MuscleGroup::Biceps],
        equipment: &[Equipment::Dumbbells],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        muscles: &[MuscleGroup::Core],
        equipment: &[Equipment::PullUpBar],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Advanced,
        target: "8-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "High Knees",
        muscles: &[MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Beginner,
        target: "30-45 sec",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Hip Circles",
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "10 each direction",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Hip Flexor Stretch",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Incline Push-Up",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Jump Rope",
        muscles: &[MuscleGroup::FullBody],
        equipment: &[Equipment::JumpRope],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Intermediate,
        target: "3-5 min",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Jump Squat",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Jumping Jacks",
        muscles: &[MuscleGroup::FullBody],
        equipment: &[],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Beginner,
        target: "45-60 sec",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Kettlebell Press",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: &[Equipment::Kettlebell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-10",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Kettlebell Swing",
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Legs, MuscleGroup::Back],
        equipment: &[Equipment::Kettlebell],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "15-20",
        unilateral: false,
        instructions: &[
            "Hinge at the hips with the kettlebell between the legs",
            "Snap the hips forward to swing it to chest height",
            "Let it fall back into the hinge",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Knees-to-Chest Stretch",
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Back],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Lat Pulldown",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::LatPulldownMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Lat Stretch",
        muscles: &[MuscleGroup::Back],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Leg Curl",
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::LegCurlMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Leg Extension",
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::LegExtensionMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Leg Press",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[Equipment::LegPressMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Lunge",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: true,
        instructions: &[
            "Step forward and lower the back knee towards the floor",
            "Keep the front knee over the ankle",
            "Push back to the start",
        ],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Lunge",
                equipment: Some(&[Equipment::Dumbbells]),
                target: Some("8-12"),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Lying Triceps Extension",
        muscles: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Medicine Ball Slam",
        muscles: &[MuscleGroup::FullBody, MuscleGroup::Core],
        equipment: &[Equipment::MedicineBall],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Mountain Climber",
        muscles: &[MuscleGroup::Core, MuscleGroup::FullBody],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "20-30",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Overhead Triceps Stretch",
        muscles: &[MuscleGroup::Triceps],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Pigeon Pose",
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Intermediate,
        target: "60s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Pike Push-Up",
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Intermediate,
        target: "8-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Plate Front Raise",
        muscles: &[MuscleGroup::Shoulders],
        equipment: &[Equipment::WeightPlate],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Pull-Up",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::PullUpBar],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Advanced,
        target: "5-10",
        unilateral: false,
        instructions: &[
            "Hang from the bar with an overhand grip",
            "Pull until the chin clears the bar",
            "Lower all the way down",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Push-Up",
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[
            "Place the hands slightly wider than the shoulders",
            "Lower the chest to the floor with a straight body",
            "Push back up",
        ],
        variants: &[],
    },
    BaseExercise {
        name: "Reverse Snow Angel",
        muscles: &[MuscleGroup::Back, MuscleGroup::Shoulders],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Rowing Machine",
        muscles: &[MuscleGroup::Back, MuscleGroup::Legs, MuscleGroup::FullBody],
        equipment: &[Equipment::RowingMachine],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Intermediate,
        target: "10-15 min",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Russian Twist",
        muscles: &[MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "15-20",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Medicine Ball Russian Twist",
                equipment: Some(&[Equipment::MedicineBall]),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Seated Cable Row",
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::CableMachine],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "10-12",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Machine Seated Row",
                equipment: Some(&[Equipment::SeatedRowMachine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Seated Hamstring Stretch",
        muscles: &[MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Seated Spinal Twist",
        muscles: &[MuscleGroup::Back, MuscleGroup::Core],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Skater Jumps",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Intermediate,
        target: "20-30",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Sled Push",
        muscles: &[MuscleGroup::Legs, MuscleGroup::FullBody],
        equipment: &[Equipment::Sled],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Advanced,
        target: "4-6",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Stair Climber",
        muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[Equipment::StairClimber],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Intermediate,
        target: "10-15 min",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Standing Quad Stretch",
        muscles: &[MuscleGroup::Legs],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Stationary Bike",
        muscles: &[MuscleGroup::Legs],
        equipment: &[Equipment::StationaryBike],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Beginner,
        target: "15-20 min",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Stationary Bike Intervals",
                target: Some("10 min"),
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Superman",
        muscles: &[MuscleGroup::Back, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Weights,
        difficulty: Difficulty::Beginner,
        target: "12-15",
        unilateral: false,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Treadmill Run",
        muscles: &[MuscleGroup::Legs, MuscleGroup::FullBody],
        equipment: &[Equipment::Treadmill],
        kind: ExerciseType::Cardio,
        difficulty: Difficulty::Intermediate,
        target: "15-20 min",
        unilateral: false,
        instructions: &[],
        variants: &[
            ExerciseVariant {
                name: "Treadmill Incline Walk",
                target: Some("20-30 min"),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Treadmill Sprints",
                target: Some("8 x 30 sec"),
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Wall Biceps Stretch",
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Chest],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Beginner,
        target: "30s each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
    BaseExercise {
        name: "World's Greatest Stretch",
        muscles: &[MuscleGroup::FullBody, MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: &[],
        kind: ExerciseType::Mobility,
        difficulty: Difficulty::Intermediate,
        target: "5 each side",
        unilateral: true,
        instructions: &[],
        variants: &[],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Property;

    #[test]
    fn test_exercise_variant() {
        assert_eq!(
            ExerciseVariant::default(),
            ExerciseVariant {
                name: "",
                equipment: None,
                target: None,
                difficulty: None,
                unilateral: None,
            }
        );
    }

    #[test]
    fn test_exercises() {
        assert_eq!(
            EXERCISES.len(),
            BASE_EXERCISES.len()
                + BASE_EXERCISES
                    .iter()
                    .map(|e| e.variants.len())
                    .sum::<usize>()
        );

        for exercise in EXERCISES.iter() {
            let name = exercise.name.as_str();

            assert!(!exercise.default_target.is_empty(), "no target for {name}");
            assert!(exercise.video.starts_with("https://"), "no video for {name}");

            if exercise.kind != ExerciseType::Cardio {
                assert!(!exercise.muscles.is_empty(), "no muscles for {name}");
            }
            if exercise.kind == ExerciseType::Cardio {
                assert!(
                    !exercise.equipment.contains(&Equipment::Bodyweight),
                    "bodyweight marker for {name}"
                );
            }

            if name.contains("Barbell") {
                assert!(exercise.equipment.contains(&Equipment::Barbell));
            }
            if name.contains("Cable") {
                assert!(exercise.equipment.contains(&Equipment::CableMachine));
            }
            if name.contains("Dumbbell") {
                assert!(exercise.equipment.contains(&Equipment::Dumbbells));
            }
            if name.contains("Kettlebell") {
                assert!(exercise.equipment.contains(&Equipment::Kettlebell));
            }
            if name.contains("Band") {
                assert!(exercise.equipment.contains(&Equipment::ResistanceBands));
            }
            if name.contains("Medicine Ball") {
                assert!(exercise.equipment.contains(&Equipment::MedicineBall));
            }
            if name.contains("Smith") {
                assert!(exercise.equipment.contains(&Equipment::SmithMachine));
            }
            if name.contains("Treadmill") {
                assert!(exercise.equipment.contains(&Equipment::Treadmill));
            }
        }
    }

    #[test]
    fn test_exercises_unique_ids() {
        let ids = EXERCISES.iter().map(|e| e.id.clone()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn test_exercises_cover_all_muscles() {
        for muscle in MuscleGroup::iter() {
            for kind in [ExerciseType::Weights, ExerciseType::Mobility] {
                assert!(
                    EXERCISES.iter().any(|e| e.kind == kind && e.targets(*muscle)),
                    "no {kind} exercise for {muscle}"
                );
            }
        }
    }

    #[test]
    fn test_exercises_bodyweight_stretches() {
        for muscle in MuscleGroup::iter() {
            assert!(
                EXERCISES.iter().any(|e| e.kind == ExerciseType::Mobility
                    && e.is_hold()
                    && e.equipment.is_empty()
                    && e.targets(*muscle)),
                "no stretch for {muscle}"
            );
        }
    }

    #[test]
    fn test_base_exercises_order() {
        let names = BASE_EXERCISES.iter().map(|e| e.name).collect::<Vec<_>>();
        let mut names_sorted = names.clone();
        names_sorted.sort_unstable();
        assert_eq!(names, names_sorted, "unsorted");

        for exercise in BASE_EXERCISES {
            let variant_names = exercise.variants.iter().map(|e| e.name).collect::<Vec<_>>();
            let mut variant_names_sorted = variant_names.clone();
            variant_names_sorted.sort_unstable();
            assert_eq!(variant_names, variant_names_sorted, "unsorted");
        }
    }

    #[test]
    fn test_base_exercises_duplicate_names() {
        let mut names = HashSet::new();

        for exercise in BASE_EXERCISES {
            let name = exercise.name;
            assert!(!names.contains(name), "duplicate name {name}");
            names.insert(name);

            for variant in exercise.variants {
                let name = variant.name;
                assert!(!names.contains(name), "duplicate name {name}");
                names.insert(name);
            }
        }
    }

    #[test]
    fn test_base_exercises_duplicate_muscles() {
        for exercise in BASE_EXERCISES {
            let muscles = exercise.muscles.iter().collect::<HashSet<_>>();
            assert_eq!(
                exercise.muscles.len(),
                muscles.len(),
                "duplicate muscle entries for \"{}\"",
                exercise.name
            );
        }
    }

    #[test]
    fn test_exercise_lookup() {
        let push_up = exercise(&ExerciseID::from("push-up")).unwrap();

        assert_eq!(push_up.name, "Push-Up");
        assert!(push_up.equipment.is_empty());
        assert_eq!(exercise(&ExerciseID::from("moon-walk")), None);
    }

    #[test]
    fn test_exercise_variant_inherits() {
        let row = exercise(&ExerciseID::from("dumbbell-row")).unwrap();

        assert_eq!(row.muscles, vec![MuscleGroup::Back, MuscleGroup::Biceps]);
        assert_eq!(row.equipment, vec![Equipment::Dumbbells, Equipment::Bench]);
        assert_eq!(row.default_target, "8-12");
        assert_eq!(row.difficulty, Difficulty::Beginner);
        assert!(row.unilateral);
        assert!(!row.instructions.is_empty());
    }

    #[rstest]
    #[case("Push-Up", "push-up")]
    #[case("Child's Pose", "childs-pose")]
    #[case("Knees-to-Chest Stretch", "knees-to-chest-stretch")]
    #[case("Dumbbell Overhead Triceps Extension", "dumbbell-overhead-triceps-extension")]
    fn test_slug(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slug(name), expected);
    }

    #[test]
    fn test_video() {
        assert_eq!(
            video("World's Greatest Stretch"),
            "https://www.youtube.com/results?search_query=Worlds+Greatest+Stretch+tutorial"
        );
    }
}
