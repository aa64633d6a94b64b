use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, DeleteError, Name, ReadError, UserID, ValidationError, WorkoutPlan};

#[allow(async_fn_in_trait)]
pub trait SavedWorkoutService {
    async fn get_saved_workouts(&self, user_id: UserID) -> Result<Vec<SavedWorkout>, ReadError>;
    async fn save_workout(
        &self,
        user_id: UserID,
        name: Name,
        plan: WorkoutPlan,
    ) -> Result<SavedWorkout, CreateError>;
    async fn delete_saved_workout(
        &self,
        user_id: UserID,
        id: SavedWorkoutID,
    ) -> Result<SavedWorkoutID, DeleteError>;

    fn validate_workout_name(&self, name: &str) -> Result<Name, ValidationError> {
        Name::new(name).map_err(|err| ValidationError::Other(err.into()))
    }
}

#[allow(async_fn_in_trait)]
pub trait SavedWorkoutRepository {
    async fn read_saved_workouts(&self, user_id: UserID) -> Result<Vec<SavedWorkout>, ReadError>;
    async fn read_saved_workout(&self, id: SavedWorkoutID) -> Result<SavedWorkout, ReadError>;
    async fn create_saved_workout(
        &self,
        user_id: UserID,
        name: Name,
        plan: WorkoutPlan,
    ) -> Result<SavedWorkout, CreateError>;
    async fn delete_saved_workout(
        &self,
        id: SavedWorkoutID,
    ) -> Result<SavedWorkoutID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedWorkout {
    pub id: SavedWorkoutID,
    pub user_id: UserID,
    pub name: Name,
    pub plan: WorkoutPlan,
    pub saved_at: DateTime<Utc>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SavedWorkoutID(Uuid);

impl SavedWorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SavedWorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SavedWorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
