use std::collections::HashSet;

use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, ExerciseID, ReadError, SavedWorkoutID, UserID, ValidationError,
};

/// Number of distinct weights listed in an exercise history.
pub const TOP_WEIGHTS: usize = 5;

#[allow(async_fn_in_trait)]
pub trait PerformanceService {
    async fn get_performances(
        &self,
        user_id: UserID,
        exercise_name: &str,
    ) -> Result<Vec<Performance>, ReadError>;
    async fn log_performance(
        &self,
        user_id: UserID,
        performance: NewPerformance,
    ) -> Result<Performance, CreateError>;
    async fn delete_performance(
        &self,
        user_id: UserID,
        id: PerformanceID,
    ) -> Result<PerformanceID, DeleteError>;

    async fn get_exercise_history(
        &self,
        user_id: UserID,
        exercise_name: &str,
    ) -> Result<ExerciseHistory, ReadError> {
        let performances = self.get_performances(user_id, exercise_name).await?;
        Ok(ExerciseHistory::new(exercise_name, &performances))
    }

    fn validate_exercise_name(&self, name: &str) -> Result<String, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            Err(ValidationError::Other(
                "Exercise name must not be empty".into(),
            ))
        } else {
            Ok(name.to_string())
        }
    }

    fn validate_performance_weight(&self, weight: &str) -> Result<f32, ValidationError> {
        match weight.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_weight) => {
                if parsed_weight >= 0.0 && parsed_weight.is_finite() {
                    // -0 is stored as 0
                    Ok(parsed_weight.abs())
                } else {
                    Err(ValidationError::Other(
                        "Weight must be a non-negative decimal number".into(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Other(
                "Weight must be a decimal number".into(),
            )),
        }
    }

    fn validate_performance_reps(&self, reps: &str) -> Result<u32, ValidationError> {
        match reps.trim().parse::<u32>() {
            Ok(parsed_reps) if parsed_reps > 0 => Ok(parsed_reps),
            _ => Err(ValidationError::Other(
                "Reps must be a positive whole number".into(),
            )),
        }
    }

    fn validate_performance_sets(&self, sets: &str) -> Result<u32, ValidationError> {
        if sets.trim().is_empty() {
            return Ok(1);
        }
        match sets.trim().parse::<u32>() {
            Ok(parsed_sets) if parsed_sets > 0 => Ok(parsed_sets),
            _ => Err(ValidationError::Other(
                "Sets must be a positive whole number".into(),
            )),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait PerformanceRepository {
    async fn read_performances(
        &self,
        user_id: UserID,
        exercise_name: &str,
    ) -> Result<Vec<Performance>, ReadError>;
    async fn read_performance(&self, id: PerformanceID) -> Result<Performance, ReadError>;
    async fn create_performance(
        &self,
        user_id: UserID,
        performance: NewPerformance,
    ) -> Result<Performance, CreateError>;
    async fn delete_performance(&self, id: PerformanceID) -> Result<PerformanceID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    pub id: PerformanceID,
    pub user_id: UserID,
    pub exercise_name: String,
    pub exercise_id: Option<ExerciseID>,
    pub weight: f32,
    pub reps: u32,
    pub sets: u32,
    pub date: DateTime<Utc>,
    pub workout_id: Option<SavedWorkoutID>,
    pub notes: Option<String>,
}

/// Performance to be logged, the identity and date are assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerformance {
    pub exercise_name: String,
    pub exercise_id: Option<ExerciseID>,
    pub weight: f32,
    pub reps: u32,
    pub sets: u32,
    pub workout_id: Option<SavedWorkoutID>,
    pub notes: Option<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PerformanceID(Uuid);

impl PerformanceID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PerformanceID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PerformanceID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    pub exercise_name: String,
    pub top_weights: Vec<HistoryEntry>,
    pub total_sessions: usize,
    pub personal_record: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: PerformanceID,
    pub weight: f32,
    pub reps: u32,
    pub sets: u32,
    pub date: DateTime<Utc>,
}

impl ExerciseHistory {
    /// Summarize the performances of an exercise.
    ///
    /// The top weights contain the latest entry for each of the heaviest distinct weights. Sessions
    /// are counted as distinct calendar days.
    #[must_use]
    pub fn new(exercise_name: &str, performances: &[Performance]) -> Self {
        let mut sorted = performances.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight).then(b.date.cmp(&a.date)));

        let mut weights = HashSet::new();
        let top_weights = sorted
            .iter()
            .filter(|p| weights.insert(p.weight.to_bits()))
            .take(TOP_WEIGHTS)
            .map(|p| HistoryEntry {
                id: p.id,
                weight: p.weight,
                reps: p.reps,
                sets: p.sets,
                date: p.date,
            })
            .collect();

        Self {
            exercise_name: exercise_name.to_string(),
            top_weights,
            total_sessions: performances
                .iter()
                .map(|p| p.date.date_naive())
                .collect::<HashSet<_>>()
                .len(),
            personal_record: sorted.first().map_or(0.0, |p| p.weight),
        }
    }
}
