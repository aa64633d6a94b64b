use log::debug;

use crate::{
    Exercise, ExerciseType, MuscleGroup, RandomSource, WorkoutItem, rounds_per_stretch,
    select_exercises, stretch_cap,
};

const DEFAULT_HOLD: &str = "30s each side";

/// Build a stretching session for the muscles filling the given time.
///
/// Only held mobility exercises targeting one of the muscles are considered. Each muscle is
/// covered first if possible, and every stretch is repeated for the same number of rounds.
pub fn build_stretch_session(
    muscles: &[MuscleGroup],
    candidates: &[&Exercise],
    minutes: u32,
    random: &mut impl RandomSource,
) -> Vec<WorkoutItem> {
    if minutes == 0 {
        return vec![];
    }

    let relevant = candidates
        .iter()
        .filter(|e| e.kind == ExerciseType::Mobility && e.is_hold() && e.targets_any(muscles))
        .copied()
        .collect::<Vec<_>>();
    let cap = stretch_cap(minutes).min(relevant.len());
    let selected = select_exercises(muscles, &relevant, cap, ExerciseType::Mobility, random);
    let rounds = rounds_per_stretch(minutes, selected.len());

    debug!(
        "selected {} of {} stretches with {rounds} rounds for {minutes} min",
        selected.len(),
        relevant.len()
    );

    selected
        .into_iter()
        .map(|e| WorkoutItem::new(e, rounds, stretch_target(e, rounds), None))
        .collect()
}

/// Hold of the stretch, with the number of rounds if it is repeated.
#[must_use]
pub fn stretch_target(exercise: &Exercise, rounds: u32) -> String {
    let hold = if exercise.has_hold_target() {
        exercise.default_target.as_str()
    } else {
        DEFAULT_HOLD
    };
    if rounds > 1 {
        format!("{hold} ({rounds} rounds)")
    } else {
        hold.to_string()
    }
}
