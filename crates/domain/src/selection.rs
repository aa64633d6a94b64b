use std::collections::HashSet;

use log::debug;

use crate::{Exercise, ExerciseType, MuscleGroup, RandomSource, shuffle};

/// Select up to `count` distinct exercises of the given type for the muscles.
///
/// Each muscle first gets one randomly chosen exercise targeting it, if any is left. The
/// remaining slots are filled with random exercises targeting any of the muscles.
pub fn select_exercises<'a>(
    muscles: &[MuscleGroup],
    candidates: &[&'a Exercise],
    count: usize,
    kind: ExerciseType,
    random: &mut impl RandomSource,
) -> Vec<&'a Exercise> {
    let candidates = candidates
        .iter()
        .filter(|e| e.kind == kind)
        .copied()
        .collect::<Vec<_>>();
    let mut selected: Vec<&Exercise> = vec![];
    let mut used = HashSet::new();

    for muscle in muscles {
        let matching = candidates
            .iter()
            .filter(|e| e.targets(*muscle) && !used.contains(&e.id))
            .copied()
            .collect::<Vec<_>>();
        if let Some(&exercise) = shuffle(&matching, random).first() {
            used.insert(&exercise.id);
            selected.push(exercise);
        }
    }

    let remaining = candidates
        .iter()
        .filter(|e| !used.contains(&e.id) && e.targets_any(muscles))
        .copied()
        .collect::<Vec<_>>();
    let mut remaining = shuffle(&remaining, random);

    while selected.len() < count {
        let Some(exercise) = remaining.pop() else {
            break;
        };
        selected.push(exercise);
    }

    selected.truncate(count);

    debug!(
        "selected {} of {count} {} exercises for {} muscles",
        selected.len(),
        kind,
        muscles.len()
    );

    selected
}

/// Select up to `count` random cardio exercises.
pub fn select_cardio<'a>(
    candidates: &[&'a Exercise],
    count: usize,
    random: &mut impl RandomSource,
) -> Vec<&'a Exercise> {
    let cardio = candidates
        .iter()
        .filter(|e| e.kind == ExerciseType::Cardio)
        .copied()
        .collect::<Vec<_>>();
    let mut selected = shuffle(&cardio, random);
    selected.truncate(count);
    selected
}
