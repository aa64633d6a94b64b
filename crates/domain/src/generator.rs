use log::debug;

use crate::{
    Allocation, Composition, Exercise, ExerciseType, Intensity, Property, RandomSource, Summary,
    WorkoutInputs, WorkoutPlan, WorkoutSection, WorkoutStyle, build_stretch_session,
    filter_by_equipment, select_cardio, select_exercises,
};

/// Generate a workout plan from the given exercises.
///
/// The inputs are expected to be valid (see [`WorkoutInputs::validate`]). Generation never fails,
/// sections are left short or empty if there are not enough suitable exercises.
pub fn generate(
    inputs: &WorkoutInputs,
    catalog: &[Exercise],
    random: &mut impl RandomSource,
) -> WorkoutPlan {
    let candidates = filter_by_equipment(catalog, &inputs.equipment);

    debug!(
        "generating {} plan from {} of {} exercises",
        inputs.style,
        candidates.len(),
        catalog.len()
    );

    if inputs.stretching_only {
        return stretching_plan(inputs, &candidates, random);
    }

    let split = inputs.cardio_split.min(100);
    let allocation = Allocation::new(inputs.duration_minutes, inputs.stretching_minutes, split);

    debug!("{allocation:?}");

    let weights = select_exercises(
        &inputs.muscles,
        &candidates,
        allocation.weights_count,
        ExerciseType::Weights,
        random,
    );
    let cardio = select_cardio(&candidates, allocation.cardio_count, random);
    let stretching = build_stretch_session(
        &inputs.muscles,
        &candidates,
        inputs.stretching_minutes,
        random,
    );
    let main = Composition::new(
        inputs.style,
        allocation.weights_minutes,
        allocation.cardio_minutes,
    )
    .compose(&weights, &cardio, inputs.intensity);

    WorkoutPlan {
        summary: Summary {
            title: format!("Your {}-minute workout", inputs.duration_minutes),
            muscles: join(&inputs.muscles),
            equipment: join(&inputs.equipment),
            intensity: inputs.intensity.to_string(),
            cardio_percent: split,
            weights_percent: 100 - split,
            style: inputs.style,
            stretching_minutes: inputs.stretching_minutes,
            stretching_only: false,
        },
        stretching: WorkoutSection {
            title: format!("Stretching ({} min)", inputs.stretching_minutes),
            items: stretching,
        },
        main: WorkoutSection {
            title: format!("Main Workout ({} min)", allocation.main_minutes),
            items: main,
        },
    }
}

fn stretching_plan(
    inputs: &WorkoutInputs,
    candidates: &[&Exercise],
    random: &mut impl RandomSource,
) -> WorkoutPlan {
    let duration = inputs.duration_minutes;
    let stretching = build_stretch_session(&inputs.muscles, candidates, duration, random);

    WorkoutPlan {
        summary: Summary {
            title: format!("{duration}-minute Stretching Session"),
            muscles: join(&inputs.muscles),
            equipment: "Bodyweight".to_string(),
            intensity: Intensity::Easy.to_string(),
            cardio_percent: 0,
            weights_percent: 0,
            style: WorkoutStyle::Traditional,
            stretching_minutes: duration,
            stretching_only: true,
        },
        stretching: WorkoutSection {
            title: format!("Stretching ({duration} min)"),
            items: stretching,
        },
        main: WorkoutSection {
            title: "Main Workout (0 min)".to_string(),
            items: vec![],
        },
    }
}

fn join<T: Property>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}
