use std::collections::VecDeque;

use chrono::Utc;
use gloo_storage::Storage as GlooStorage;
use ::log::debug;
use trainplan_domain as domain;
use trainplan_web_app::{Settings, SettingsRepository, log};
use uuid::Uuid;

use crate::rest::SavedWorkout;

const KEY_SAVED_WORKOUTS: &str = "savedWorkouts";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

/// Browser local storage.
///
/// Saved workouts are kept on the device, which makes them available without an account.
#[derive(Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn read<T>(key: &str) -> Result<T, gloo_storage::errors::StorageError>
    where
        T: Default + for<'de> serde::Deserialize<'de>,
    {
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(value),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(T::default()),
            Err(err) => Err(err),
        }
    }

    fn read_saved_workout_entries(&self) -> Result<Vec<SavedWorkout>, domain::StorageError> {
        Self::read(KEY_SAVED_WORKOUTS).map_err(storage_error)
    }

    fn write_saved_workout_entries(
        &self,
        workouts: &[SavedWorkout],
    ) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(KEY_SAVED_WORKOUTS, workouts).map_err(storage_error)
    }
}

impl domain::SavedWorkoutRepository for LocalStorage {
    async fn read_saved_workouts(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::SavedWorkout>, domain::ReadError> {
        self.read_saved_workout_entries()?
            .into_iter()
            .filter(|w| w.user_id == *user_id)
            .map(|w| {
                domain::SavedWorkout::try_from(w)
                    .map_err(|err| domain::ReadError::from(other(err)))
            })
            .collect()
    }

    async fn read_saved_workout(
        &self,
        id: domain::SavedWorkoutID,
    ) -> Result<domain::SavedWorkout, domain::ReadError> {
        let workout = self
            .read_saved_workout_entries()?
            .into_iter()
            .find(|w| w.id == *id)
            .ok_or(domain::ReadError::NotFound)?;
        domain::SavedWorkout::try_from(workout).map_err(|err| other(err).into())
    }

    async fn create_saved_workout(
        &self,
        user_id: domain::UserID,
        name: domain::Name,
        plan: domain::WorkoutPlan,
    ) -> Result<domain::SavedWorkout, domain::CreateError> {
        let workout = domain::SavedWorkout {
            id: Uuid::new_v4().into(),
            user_id,
            name,
            plan,
            saved_at: Utc::now(),
        };
        let mut workouts = self.read_saved_workout_entries()?;
        workouts.push(SavedWorkout::from(&workout));
        self.write_saved_workout_entries(&workouts)?;
        debug!("saved workout {} locally", *workout.id);
        Ok(workout)
    }

    async fn delete_saved_workout(
        &self,
        id: domain::SavedWorkoutID,
    ) -> Result<domain::SavedWorkoutID, domain::DeleteError> {
        let mut workouts = self.read_saved_workout_entries()?;
        let len = workouts.len();
        workouts.retain(|w| w.id != *id);
        if workouts.len() == len {
            return Err(domain::DeleteError::NotFound);
        }
        self.write_saved_workout_entries(&workouts)?;
        Ok(id)
    }
}

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        Self::read(KEY_SETTINGS).map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        Self::read(KEY_LOG).map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

fn storage_error(err: gloo_storage::errors::StorageError) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}

fn other(err: impl std::error::Error + 'static) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}
