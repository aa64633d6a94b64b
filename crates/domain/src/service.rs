use std::cell::RefCell;

use log::{debug, error};

use crate::{
    CreateError, DeleteError, InputError, Name, NewPerformance, Performance,
    PerformanceID, PerformanceRepository, PerformanceService, RandomSource, ReadError,
    SavedWorkout, SavedWorkoutID, SavedWorkoutRepository, SavedWorkoutService, ShareCode,
    ShareRepository, ShareService, ThreadRandom, UserID, WorkoutInputs, WorkoutPlan, catalog,
    generate,
};

pub struct Service<R, G = ThreadRandom> {
    repository: R,
    random: RefCell<G>,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_random(repository, ThreadRandom)
    }
}

impl<R, G: RandomSource> Service<R, G> {
    pub fn with_random(repository: R, random: G) -> Self {
        Self {
            repository,
            random: RefCell::new(random),
        }
    }

    /// Generate a plan from the built-in exercise catalog.
    pub fn generate_workout(&self, inputs: &WorkoutInputs) -> Result<WorkoutPlan, InputError> {
        inputs.validate()?;
        Ok(generate(
            inputs,
            catalog::exercises(),
            &mut *self.random.borrow_mut(),
        ))
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SavedWorkoutRepository, G> SavedWorkoutService for Service<R, G> {
    async fn get_saved_workouts(&self, user_id: UserID) -> Result<Vec<SavedWorkout>, ReadError> {
        let mut workouts = log_on_error!(
            self.repository.read_saved_workouts(user_id),
            ReadError,
            "get",
            "saved workouts"
        )?;
        workouts.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(workouts)
    }

    async fn save_workout(
        &self,
        user_id: UserID,
        name: Name,
        plan: WorkoutPlan,
    ) -> Result<SavedWorkout, CreateError> {
        log_on_error!(
            self.repository.create_saved_workout(user_id, name, plan),
            CreateError,
            "save",
            "workout"
        )
    }

    async fn delete_saved_workout(
        &self,
        user_id: UserID,
        id: SavedWorkoutID,
    ) -> Result<SavedWorkoutID, DeleteError> {
        log_on_error!(
            async {
                let workout = self.repository.read_saved_workout(id).await?;
                if workout.user_id != user_id {
                    return Err(DeleteError::Forbidden);
                }
                self.repository.delete_saved_workout(id).await
            },
            DeleteError,
            "delete",
            "saved workout"
        )
    }
}

impl<R: ShareRepository, G: RandomSource> ShareService for Service<R, G> {
    async fn share_workout(&self, plan: WorkoutPlan) -> Result<ShareCode, CreateError> {
        log_on_error!(
            async {
                loop {
                    let code = ShareCode::generate(&mut *self.random.borrow_mut());
                    if !self.repository.contains_shared_workout(&code).await? {
                        return self.repository.write_shared_workout(&code, plan).await;
                    }
                    debug!("share code {code} already taken");
                }
            },
            CreateError,
            "share",
            "workout"
        )
    }

    async fn get_shared_workout(&self, code: &ShareCode) -> Result<WorkoutPlan, ReadError> {
        log_on_error!(
            self.repository.read_shared_workout(code),
            ReadError,
            "get",
            "shared workout"
        )
    }
}

impl<R: PerformanceRepository, G> PerformanceService for Service<R, G> {
    async fn get_performances(
        &self,
        user_id: UserID,
        exercise_name: &str,
    ) -> Result<Vec<Performance>, ReadError> {
        log_on_error!(
            self.repository.read_performances(user_id, exercise_name),
            ReadError,
            "get",
            "performances"
        )
    }

    async fn log_performance(
        &self,
        user_id: UserID,
        performance: NewPerformance,
    ) -> Result<Performance, CreateError> {
        log_on_error!(
            self.repository.create_performance(user_id, performance),
            CreateError,
            "log",
            "performance"
        )
    }

    async fn delete_performance(
        &self,
        user_id: UserID,
        id: PerformanceID,
    ) -> Result<PerformanceID, DeleteError> {
        log_on_error!(
            async {
                let performance = self.repository.read_performance(id).await?;
                if performance.user_id != user_id {
                    return Err(DeleteError::Forbidden);
                }
                self.repository.delete_performance(id).await
            },
            DeleteError,
            "delete",
            "performance"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    use chrono::{DateTime, TimeZone, Utc};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{MuscleGroup, Sequence, StorageError, Summary, WorkoutSection};

    #[derive(Default)]
    struct FakeRepository {
        saved_workouts: RefCell<Vec<SavedWorkout>>,
        shared_workouts: RefCell<BTreeMap<ShareCode, WorkoutPlan>>,
        performances: RefCell<Vec<Performance>>,
        contains_calls: Cell<usize>,
        offline: bool,
    }

    impl FakeRepository {
        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::default()
            }
        }

        fn check_connection(&self) -> Result<(), StorageError> {
            if self.offline {
                Err(StorageError::NoConnection)
            } else {
                Ok(())
            }
        }
    }

    impl SavedWorkoutRepository for FakeRepository {
        async fn read_saved_workouts(
            &self,
            user_id: UserID,
        ) -> Result<Vec<SavedWorkout>, ReadError> {
            self.check_connection()?;
            Ok(self
                .saved_workouts
                .borrow()
                .iter()
                .filter(|w| w.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn read_saved_workout(&self, id: SavedWorkoutID) -> Result<SavedWorkout, ReadError> {
            self.check_connection()?;
            self.saved_workouts
                .borrow()
                .iter()
                .find(|w| w.id == id)
                .cloned()
                .ok_or(ReadError::NotFound)
        }

        async fn create_saved_workout(
            &self,
            user_id: UserID,
            name: Name,
            plan: WorkoutPlan,
        ) -> Result<SavedWorkout, CreateError> {
            self.check_connection()?;
            let mut workouts = self.saved_workouts.borrow_mut();
            let id = u128::try_from(workouts.len()).unwrap_or_default() + 1;
            let workout = SavedWorkout {
                id: id.into(),
                user_id,
                name,
                plan,
                saved_at: date(1),
            };
            workouts.push(workout.clone());
            Ok(workout)
        }

        async fn delete_saved_workout(
            &self,
            id: SavedWorkoutID,
        ) -> Result<SavedWorkoutID, DeleteError> {
            self.check_connection()?;
            self.saved_workouts.borrow_mut().retain(|w| w.id != id);
            Ok(id)
        }
    }

    impl ShareRepository for FakeRepository {
        async fn contains_shared_workout(&self, code: &ShareCode) -> Result<bool, ReadError> {
            self.check_connection()?;
            self.contains_calls.set(self.contains_calls.get() + 1);
            Ok(self.shared_workouts.borrow().contains_key(code))
        }

        async fn write_shared_workout(
            &self,
            code: &ShareCode,
            plan: WorkoutPlan,
        ) -> Result<ShareCode, CreateError> {
            self.check_connection()?;
            self.shared_workouts.borrow_mut().insert(code.clone(), plan);
            Ok(code.clone())
        }

        async fn read_shared_workout(&self, code: &ShareCode) -> Result<WorkoutPlan, ReadError> {
            self.check_connection()?;
            self.shared_workouts
                .borrow()
                .get(code)
                .cloned()
                .ok_or(ReadError::NotFound)
        }
    }

    impl PerformanceRepository for FakeRepository {
        async fn read_performances(
            &self,
            user_id: UserID,
            exercise_name: &str,
        ) -> Result<Vec<Performance>, ReadError> {
            self.check_connection()?;
            Ok(self
                .performances
                .borrow()
                .iter()
                .filter(|p| p.user_id == user_id && p.exercise_name == exercise_name)
                .cloned()
                .collect())
        }

        async fn read_performance(&self, id: PerformanceID) -> Result<Performance, ReadError> {
            self.check_connection()?;
            self.performances
                .borrow()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(ReadError::NotFound)
        }

        async fn create_performance(
            &self,
            user_id: UserID,
            performance: NewPerformance,
        ) -> Result<Performance, CreateError> {
            self.check_connection()?;
            let mut performances = self.performances.borrow_mut();
            let id = u128::try_from(performances.len()).unwrap_or_default() + 1;
            let performance = Performance {
                id: id.into(),
                user_id,
                exercise_name: performance.exercise_name,
                exercise_id: performance.exercise_id,
                weight: performance.weight,
                reps: performance.reps,
                sets: performance.sets,
                date: date(u32::try_from(id).unwrap_or(1)),
                workout_id: performance.workout_id,
                notes: performance.notes,
            };
            performances.push(performance.clone());
            Ok(performance)
        }

        async fn delete_performance(
            &self,
            id: PerformanceID,
        ) -> Result<PerformanceID, DeleteError> {
            self.check_connection()?;
            self.performances.borrow_mut().retain(|p| p.id != id);
            Ok(id)
        }
    }

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap()
    }

    fn plan(title: &str) -> WorkoutPlan {
        WorkoutPlan {
            summary: Summary {
                title: title.to_string(),
                ..Summary::default()
            },
            stretching: WorkoutSection::default(),
            main: WorkoutSection::default(),
        }
    }

    fn saved_workout(id: u128, user_id: u128, day: u32) -> SavedWorkout {
        SavedWorkout {
            id: id.into(),
            user_id: user_id.into(),
            name: Name::new(&format!("Workout {id}")).unwrap(),
            plan: plan("Workout"),
            saved_at: date(day),
        }
    }

    fn new_performance(name: &str, weight: f32) -> NewPerformance {
        NewPerformance {
            exercise_name: name.to_string(),
            exercise_id: None,
            weight,
            reps: 5,
            sets: 3,
            workout_id: None,
            notes: None,
        }
    }

    #[test]
    fn test_get_saved_workouts_newest_first() {
        let repository = FakeRepository::default();
        *repository.saved_workouts.borrow_mut() = vec![
            saved_workout(1, 1, 3),
            saved_workout(2, 1, 9),
            saved_workout(3, 2, 5),
            saved_workout(4, 1, 6),
        ];
        let service = Service::new(repository);

        let workouts = block_on(service.get_saved_workouts(UserID::from(1))).unwrap();

        assert_eq!(
            workouts.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![2.into(), 4.into(), 1.into()]
        );
    }

    #[test]
    fn test_save_workout() {
        let service = Service::new(FakeRepository::default());

        let workout = block_on(service.save_workout(
            UserID::from(1),
            Name::new("Push Day").unwrap(),
            plan("Push"),
        ))
        .unwrap();

        assert_eq!(workout.name.to_string(), "Push Day");
        assert_eq!(
            block_on(service.get_saved_workouts(UserID::from(1))).unwrap(),
            vec![workout]
        );
    }

    #[test]
    fn test_delete_saved_workout() {
        let repository = FakeRepository::default();
        *repository.saved_workouts.borrow_mut() =
            vec![saved_workout(1, 1, 3), saved_workout(2, 2, 4)];
        let service = Service::new(repository);

        assert!(matches!(
            block_on(service.delete_saved_workout(UserID::from(1), 2.into())),
            Err(DeleteError::Forbidden)
        ));
        assert!(matches!(
            block_on(service.delete_saved_workout(UserID::from(1), 3.into())),
            Err(DeleteError::NotFound)
        ));
        assert_eq!(
            block_on(service.delete_saved_workout(UserID::from(1), 1.into())).unwrap(),
            SavedWorkoutID::from(1)
        );
        assert!(
            block_on(service.get_saved_workouts(UserID::from(1)))
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            block_on(service.get_saved_workouts(UserID::from(2)))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_saved_workouts_offline() {
        let service = Service::new(FakeRepository::offline());

        assert!(matches!(
            block_on(service.get_saved_workouts(UserID::from(1))),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }

    #[test]
    fn test_share_workout() {
        let service = Service::with_random(FakeRepository::default(), Sequence::new(&[0]));

        let code = block_on(service.share_workout(plan("Shared"))).unwrap();

        assert_eq!(code.to_string(), "aaaaaa");
        assert_eq!(
            block_on(service.get_shared_workout(&code)).unwrap(),
            plan("Shared")
        );
    }

    #[test]
    fn test_share_workout_collision() {
        let repository = FakeRepository::default();
        repository
            .shared_workouts
            .borrow_mut()
            .insert(ShareCode::new("aaaaaa").unwrap(), plan("Existing"));
        let service = Service::with_random(
            repository,
            Sequence::new(&[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1]),
        );

        let code = block_on(service.share_workout(plan("New"))).unwrap();

        assert_eq!(code.to_string(), "bbbbbb");
        assert_eq!(service.repository.contains_calls.get(), 2);
        assert_eq!(
            block_on(service.get_shared_workout(&ShareCode::new("aaaaaa").unwrap())).unwrap(),
            plan("Existing")
        );
        assert_eq!(block_on(service.get_shared_workout(&code)).unwrap(), plan("New"));
    }

    #[test]
    fn test_get_shared_workout_not_found() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            block_on(service.get_shared_workout(&ShareCode::new("zzzzzz").unwrap())),
            Err(ReadError::NotFound)
        ));
    }

    #[test]
    fn test_share_workout_offline() {
        let service = Service::new(FakeRepository::offline());

        assert!(matches!(
            block_on(service.share_workout(plan("Shared"))),
            Err(CreateError::Storage(StorageError::NoConnection))
        ));
    }

    #[test]
    fn test_performances() {
        let service = Service::new(FakeRepository::default());
        let user_id = UserID::from(1);

        for weight in [60.0, 70.0, 65.0, 70.0] {
            block_on(service.log_performance(user_id, new_performance("Back Squat", weight)))
                .unwrap();
        }
        block_on(service.log_performance(user_id, new_performance("Deadlift", 120.0))).unwrap();
        block_on(service.log_performance(UserID::from(2), new_performance("Back Squat", 200.0)))
            .unwrap();

        assert_eq!(
            block_on(service.get_performances(user_id, "Back Squat"))
                .unwrap()
                .len(),
            4
        );

        let history = block_on(service.get_exercise_history(user_id, "Back Squat")).unwrap();

        assert_eq!(
            history.top_weights.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![4.into(), 3.into(), 1.into()]
        );
        assert_eq!(history.total_sessions, 4);
        assert_eq!(history.personal_record.to_string(), "70");
    }

    #[test]
    fn test_delete_performance() {
        let service = Service::new(FakeRepository::default());
        let performance = block_on(
            service.log_performance(UserID::from(1), new_performance("Back Squat", 60.0)),
        )
        .unwrap();

        assert!(matches!(
            block_on(service.delete_performance(UserID::from(2), performance.id)),
            Err(DeleteError::Forbidden)
        ));
        assert!(matches!(
            block_on(service.delete_performance(UserID::from(1), 9.into())),
            Err(DeleteError::NotFound)
        ));
        assert_eq!(
            block_on(service.delete_performance(UserID::from(1), performance.id)).unwrap(),
            performance.id
        );
        assert!(
            block_on(service.get_performances(UserID::from(1), "Back Squat"))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_generate_workout() {
        let service = Service::with_random(FakeRepository::default(), Sequence::new(&[1, 2]));
        let inputs = WorkoutInputs {
            muscles: vec![MuscleGroup::Chest, MuscleGroup::Back],
            ..WorkoutInputs::default()
        };

        let plan = service.generate_workout(&inputs).unwrap();

        assert!(!plan.main.items.is_empty());
        assert_eq!(plan.summary.cardio_percent, 30);
        assert!(matches!(
            service.generate_workout(&WorkoutInputs::default()),
            Err(InputError::NoMuscles)
        ));
    }
}
