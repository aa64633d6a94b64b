use log::debug;

use crate::{
    Exercise, Intensity, MuscleCategory, MuscleGroup, Property, SUPERSET_MARKER, WorkoutItem,
    WorkoutStyle,
};

/// Assumed working time of a weights exercise in a circuit.
const CIRCUIT_WORK_SECONDS: u32 = 40;
/// Assumed working time of a cardio exercise in a circuit.
const CARDIO_WORK_SECONDS: u32 = 60;
const CARDIO_CIRCUIT_ID: &str = "circuit-cardio";
const CARDIO_INTERVAL: &str = "45-60s";
const AMRAP_CIRCUIT_ID: &str = "amrap-round";

/// Arrangement of the main workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    Traditional,
    Circuit {
        weights_minutes: u32,
        cardio_minutes: u32,
    },
    Superset,
    Amrap,
}

impl Composition {
    #[must_use]
    pub fn new(style: WorkoutStyle, weights_minutes: u32, cardio_minutes: u32) -> Self {
        match style {
            WorkoutStyle::Traditional => Composition::Traditional,
            WorkoutStyle::Circuit => Composition::Circuit {
                weights_minutes,
                cardio_minutes,
            },
            WorkoutStyle::Superset => Composition::Superset,
            WorkoutStyle::Amrap => Composition::Amrap,
        }
    }

    /// Arrange the weights and cardio exercises into workout items.
    ///
    /// Weights always precede cardio.
    #[must_use]
    pub fn compose(
        self,
        weights: &[&Exercise],
        cardio: &[&Exercise],
        intensity: Intensity,
    ) -> Vec<WorkoutItem> {
        match self {
            Composition::Traditional => traditional(weights, cardio, intensity),
            Composition::Circuit {
                weights_minutes,
                cardio_minutes,
            } => circuit(weights, cardio, intensity, weights_minutes, cardio_minutes),
            Composition::Superset => superset(weights, cardio, intensity),
            Composition::Amrap => amrap(weights, cardio),
        }
    }
}

fn reps(exercise: &Exercise) -> String {
    format!("{} reps", exercise.default_target)
}

fn traditional(weights: &[&Exercise], cardio: &[&Exercise], intensity: Intensity) -> Vec<WorkoutItem> {
    weights
        .iter()
        .map(|e| {
            WorkoutItem::new(
                e,
                intensity.sets(),
                reps(e),
                Some(intensity.rest_seconds()),
            )
        })
        .chain(
            cardio
                .iter()
                .map(|e| WorkoutItem::new(e, 1, e.default_target.clone(), Some(60))),
        )
        .collect()
}

fn circuit(
    weights: &[&Exercise],
    cardio: &[&Exercise],
    intensity: Intensity,
    weights_minutes: u32,
    cardio_minutes: u32,
) -> Vec<WorkoutItem> {
    let rest = intensity.circuit_rest_seconds();
    let mut items = vec![];

    if !weights.is_empty() {
        let organized = organize_for_circuits(weights);
        let size = circuit_size(organized.len());
        let rounds = circuit_rounds(organized.len(), size, weights_minutes, rest);

        debug!(
            "arranging {} exercises in circuits of {size} with {rounds} rounds",
            organized.len()
        );

        let mut number = 1;
        for chunk in organized.chunks(size) {
            if let [exercise] = chunk {
                items.push(WorkoutItem::new(
                    exercise,
                    intensity.sets(),
                    reps(exercise),
                    Some(intensity.rest_seconds()),
                ));
            } else {
                let id = format!("circuit-{number}");
                items.extend(chunk.iter().map(|e| {
                    WorkoutItem::new(e, 1, reps(e), Some(rest)).in_circuit(&id, rounds)
                }));
                number += 1;
            }
        }
    }

    if !cardio.is_empty() {
        let rounds = cardio_circuit_rounds(cardio.len(), cardio_minutes, rest);
        items.extend(cardio.iter().map(|e| {
            let target = if e.default_target.contains("min") || e.default_target.contains("sec") {
                CARDIO_INTERVAL.to_string()
            } else {
                e.default_target.clone()
            };
            WorkoutItem::new(e, 1, target, Some(rest)).in_circuit(CARDIO_CIRCUIT_ID, rounds)
        }));
    }

    items
}

fn superset(weights: &[&Exercise], cardio: &[&Exercise], intensity: Intensity) -> Vec<WorkoutItem> {
    weights
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut item = WorkoutItem::new(e, intensity.sets(), reps(e), None);
            if i % 2 == 0 {
                item.name = format!("{SUPERSET_MARKER}{}", item.name);
                item.rest_seconds = Some(0);
            } else {
                item.rest_seconds = Some(intensity.superset_rest_seconds());
            }
            item
        })
        .chain(
            cardio
                .iter()
                .map(|e| WorkoutItem::new(e, 1, e.default_target.clone(), Some(45))),
        )
        .collect()
}

fn amrap(weights: &[&Exercise], cardio: &[&Exercise]) -> Vec<WorkoutItem> {
    weights
        .iter()
        .chain(cardio)
        .map(|e| {
            WorkoutItem::new(e, 1, amrap_target(&e.default_target), Some(0))
                .in_circuit(AMRAP_CIRCUIT_ID, 0)
        })
        .collect()
}

/// Collapse a range like "8-12" to a fixed number of repetitions.
///
/// The midpoint is rounded half up. Targets which are no range are kept.
#[must_use]
pub fn amrap_target(target: &str) -> String {
    let mut parts = target.split('-');
    let (Some(low), Some(high)) = (parts.next(), parts.next()) else {
        return target.to_string();
    };
    match (leading_number(low), leading_number(high)) {
        (Some(low), Some(high)) => format!("{} reps", (low + high).div_ceil(2)),
        _ => target.to_string(),
    }
}

fn leading_number(value: &str) -> Option<u32> {
    let digits = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>();
    digits.parse().ok()
}

/// Reorder exercises to alternate between muscle categories.
///
/// Exercises are bucketed by the category of their first muscle (core if they have none) and
/// then interleaved in the order push, pull, legs, core.
#[must_use]
pub fn organize_for_circuits<'a>(exercises: &[&'a Exercise]) -> Vec<&'a Exercise> {
    let buckets = MuscleCategory::iter()
        .map(|category| {
            exercises
                .iter()
                .filter(|e| {
                    e.muscles
                        .first()
                        .map_or(MuscleCategory::Core, |m: &MuscleGroup| m.category())
                        == *category
                })
                .copied()
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let longest = buckets.iter().map(Vec::len).max().unwrap_or(0);

    (0..longest)
        .flat_map(|i| buckets.iter().filter_map(move |b| b.get(i).copied()))
        .collect()
}

/// Number of exercises per circuit.
#[must_use]
pub fn circuit_size(exercises: usize) -> usize {
    match exercises {
        0 | 1 => 1,
        2..=4 => exercises,
        _ => {
            let circuits = exercises.div_ceil(4);
            exercises.div_ceil(circuits).clamp(2, 5)
        }
    }
}

/// Rounds of each weights circuit fitting into the available time, between two and four.
#[must_use]
pub fn circuit_rounds(exercises: usize, size: usize, minutes: u32, rest_seconds: u32) -> u32 {
    if exercises == 0 || size == 0 {
        return 2;
    }
    let circuits = exercises.div_ceil(size);
    let round_seconds = (circuits * size) as u64 * u64::from(CIRCUIT_WORK_SECONDS + rest_seconds);
    let fitting = u64::from(minutes) * 60 / round_seconds;
    u32::try_from(fitting.clamp(2, 4)).unwrap_or(4)
}

/// Rounds of the cardio circuit fitting into the available time, at least one.
#[must_use]
pub fn cardio_circuit_rounds(exercises: usize, minutes: u32, rest_seconds: u32) -> u32 {
    if exercises == 0 {
        return 1;
    }
    let round_seconds = exercises as u64 * u64::from(CARDIO_WORK_SECONDS + rest_seconds);
    let fitting = u64::from(minutes) * 60 / round_seconds;
    u32::try_from(fitting.max(1)).unwrap_or(u32::MAX)
}
