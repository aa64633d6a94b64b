use chrono::{DateTime, Utc};
use gloo_net::http::{Request, Response};
use serde_json::json;
use trainplan_domain as domain;
use uuid::Uuid;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sender: GlooNetSendRequest,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> REST<S> {
    async fn fetch<T>(&self, request: Result<Request, gloo_net::Error>) -> Result<T, FetchError>
    where
        T: 'static + for<'de> serde::Deserialize<'de>,
    {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Deserialization(err.to_string()))
    }

    async fn fetch_no_content<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
        result: T,
    ) -> Result<T, FetchError> {
        self.send(request).await?;
        Ok(result)
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>) -> Result<Response, FetchError> {
        let request = request.map_err(|err| FetchError::Serialization(err.to_string()))?;
        match self.sender.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    Ok(response)
                } else {
                    Err(FetchError::from_status(
                        response.status(),
                        &response.status_text(),
                    ))
                }
            }
            Err(_) => Err(FetchError::NoConnection),
        }
    }
}

impl<S: SendRequest> domain::SavedWorkoutRepository for REST<S> {
    async fn read_saved_workouts(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::SavedWorkout>, domain::ReadError> {
        let workouts: Vec<SavedWorkout> = self
            .fetch(
                Request::get("api/workouts")
                    .query([("user_id", user_id.to_string())])
                    .build(),
            )
            .await?;
        workouts
            .into_iter()
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
        let workout: SavedWorkout = self
            .fetch(Request::get(&format!("api/workouts/{}", *id)).build())
            .await?;
        domain::SavedWorkout::try_from(workout).map_err(|err| other(err).into())
    }

    async fn create_saved_workout(
        &self,
        user_id: domain::UserID,
        name: domain::Name,
        plan: domain::WorkoutPlan,
    ) -> Result<domain::SavedWorkout, domain::CreateError> {
        let workout: SavedWorkout = self
            .fetch(Request::post("api/workouts").json(&json!({
                "user_id": *user_id,
                "name": name.to_string(),
                "plan": WorkoutPlan::from(&plan),
            })))
            .await?;
        domain::SavedWorkout::try_from(workout).map_err(|err| other(err).into())
    }

    async fn delete_saved_workout(
        &self,
        id: domain::SavedWorkoutID,
    ) -> Result<domain::SavedWorkoutID, domain::DeleteError> {
        Ok(self
            .fetch_no_content(
                Request::delete(&format!("api/workouts/{}", *id)).build(),
                id,
            )
            .await?)
    }
}

impl<S: SendRequest> domain::ShareRepository for REST<S> {
    async fn contains_shared_workout(
        &self,
        code: &domain::ShareCode,
    ) -> Result<bool, domain::ReadError> {
        match self
            .fetch_no_content(Request::get(&format!("api/share/{code}")).build(), true)
            .await
        {
            Err(FetchError::NotFound) => Ok(false),
            result => Ok(result?),
        }
    }

    async fn write_shared_workout(
        &self,
        code: &domain::ShareCode,
        plan: domain::WorkoutPlan,
    ) -> Result<domain::ShareCode, domain::CreateError> {
        Ok(self
            .fetch_no_content(
                Request::post("api/share").json(&json!({
                    "code": code.to_string(),
                    "plan": WorkoutPlan::from(&plan),
                })),
                code.clone(),
            )
            .await?)
    }

    async fn read_shared_workout(
        &self,
        code: &domain::ShareCode,
    ) -> Result<domain::WorkoutPlan, domain::ReadError> {
        let plan: WorkoutPlan = self
            .fetch(Request::get(&format!("api/share/{code}")).build())
            .await?;
        domain::WorkoutPlan::try_from(plan).map_err(|err| other(err).into())
    }
}

impl<S: SendRequest> domain::PerformanceRepository for REST<S> {
    async fn read_performances(
        &self,
        user_id: domain::UserID,
        exercise_name: &str,
    ) -> Result<Vec<domain::Performance>, domain::ReadError> {
        let performances: Vec<Performance> = self
            .fetch(
                Request::get("api/performance")
                    .query([
                        ("user_id", user_id.to_string()),
                        ("exercise_name", exercise_name.to_string()),
                    ])
                    .build(),
            )
            .await?;
        Ok(performances
            .into_iter()
            .map(domain::Performance::from)
            .collect())
    }

    async fn read_performance(
        &self,
        id: domain::PerformanceID,
    ) -> Result<domain::Performance, domain::ReadError> {
        let performance: Performance = self
            .fetch(Request::get(&format!("api/performance/{}", *id)).build())
            .await?;
        Ok(performance.into())
    }

    async fn create_performance(
        &self,
        user_id: domain::UserID,
        performance: domain::NewPerformance,
    ) -> Result<domain::Performance, domain::CreateError> {
        let performance: Performance = self
            .fetch(Request::post("api/performance").json(&json!({
                "user_id": *user_id,
                "exercise_name": performance.exercise_name,
                "exercise_id": performance.exercise_id.map(|id| id.to_string()),
                "weight": performance.weight,
                "reps": performance.reps,
                "sets": performance.sets,
                "workout_id": performance.workout_id.map(|id| *id),
                "notes": performance.notes,
            })))
            .await?;
        Ok(performance.into())
    }

    async fn delete_performance(
        &self,
        id: domain::PerformanceID,
    ) -> Result<domain::PerformanceID, domain::DeleteError> {
        Ok(self
            .fetch_no_content(
                Request::delete(&format!("api/performance/{}", *id)).build(),
                id,
            )
            .await?)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FetchError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("{0} {1}")]
    Status(u16, String),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl FetchError {
    fn from_status(status: u16, status_text: &str) -> Self {
        match status {
            401 => FetchError::NoSession,
            403 => FetchError::Forbidden,
            404 => FetchError::NotFound,
            409 => FetchError::Conflict,
            _ => FetchError::Status(status, status_text.to_string()),
        }
    }
}

impl From<FetchError> for domain::StorageError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NoConnection => domain::StorageError::NoConnection,
            FetchError::NoSession => domain::StorageError::NoSession,
            err => domain::StorageError::Other(err.into()),
        }
    }
}

impl From<FetchError> for domain::ReadError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NotFound => domain::ReadError::NotFound,
            err => domain::ReadError::Storage(err.into()),
        }
    }
}

impl From<FetchError> for domain::CreateError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::Conflict => domain::CreateError::Conflict,
            err => domain::CreateError::Storage(err.into()),
        }
    }
}

impl From<FetchError> for domain::DeleteError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NotFound => domain::DeleteError::NotFound,
            FetchError::Forbidden => domain::DeleteError::Forbidden,
            err => domain::DeleteError::Storage(err.into()),
        }
    }
}

fn other(err: impl std::error::Error + 'static) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedWorkout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub plan: WorkoutPlan,
    pub saved_at: DateTime<Utc>,
}

impl From<&domain::SavedWorkout> for SavedWorkout {
    fn from(value: &domain::SavedWorkout) -> Self {
        Self {
            id: *value.id,
            user_id: *value.user_id,
            name: value.name.to_string(),
            plan: WorkoutPlan::from(&value.plan),
            saved_at: value.saved_at,
        }
    }
}

impl TryFrom<SavedWorkout> for domain::SavedWorkout {
    type Error = SavedWorkoutError;

    fn try_from(value: SavedWorkout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            name: domain::Name::new(&value.name)?,
            plan: value.plan.try_into()?,
            saved_at: value.saved_at,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SavedWorkoutError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidPlan(#[from] WorkoutPlanError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub summary: Summary,
    pub stretching: WorkoutSection,
    pub main: WorkoutSection,
}

impl From<&domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            summary: Summary::from(&value.summary),
            stretching: WorkoutSection::from(&value.stretching),
            main: WorkoutSection::from(&value.main),
        }
    }
}

impl TryFrom<WorkoutPlan> for domain::WorkoutPlan {
    type Error = WorkoutPlanError;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            summary: value.summary.try_into()?,
            stretching: value.stretching.try_into()?,
            main: value.main.try_into()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutPlanError {
    #[error(transparent)]
    InvalidStyle(#[from] domain::InputError),
    #[error(transparent)]
    InvalidMuscle(#[from] domain::MuscleGroupError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub muscles: String,
    pub equipment: String,
    pub intensity: String,
    pub cardio_percent: u32,
    pub weights_percent: u32,
    pub style: String,
    pub stretching_minutes: u32,
    pub stretching_only: bool,
}

impl From<&domain::Summary> for Summary {
    fn from(value: &domain::Summary) -> Self {
        Self {
            title: value.title.clone(),
            muscles: value.muscles.clone(),
            equipment: value.equipment.clone(),
            intensity: value.intensity.clone(),
            cardio_percent: value.cardio_percent,
            weights_percent: value.weights_percent,
            style: value.style.to_string(),
            stretching_minutes: value.stretching_minutes,
            stretching_only: value.stretching_only,
        }
    }
}

impl TryFrom<Summary> for domain::Summary {
    type Error = domain::InputError;

    fn try_from(value: Summary) -> Result<Self, Self::Error> {
        Ok(Self {
            style: domain::WorkoutStyle::try_from(value.style.as_str())?,
            title: value.title,
            muscles: value.muscles,
            equipment: value.equipment,
            intensity: value.intensity,
            cardio_percent: value.cardio_percent,
            weights_percent: value.weights_percent,
            stretching_minutes: value.stretching_minutes,
            stretching_only: value.stretching_only,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSection {
    pub title: String,
    pub items: Vec<WorkoutItem>,
}

impl From<&domain::WorkoutSection> for WorkoutSection {
    fn from(value: &domain::WorkoutSection) -> Self {
        Self {
            title: value.title.clone(),
            items: value.items.iter().map(WorkoutItem::from).collect(),
        }
    }
}

impl TryFrom<WorkoutSection> for domain::WorkoutSection {
    type Error = domain::MuscleGroupError;

    fn try_from(value: WorkoutSection) -> Result<Self, Self::Error> {
        Ok(Self {
            title: value.title,
            items: value
                .items
                .into_iter()
                .map(domain::WorkoutItem::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutItem {
    pub name: String,
    pub sets: u32,
    pub target: String,
    pub rest_seconds: Option<u32>,
    pub video: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub circuit: Option<Circuit>,
    #[serde(default)]
    pub muscles: Vec<String>,
    #[serde(default)]
    pub exercise_id: Option<String>,
}

impl From<&domain::WorkoutItem> for WorkoutItem {
    fn from(value: &domain::WorkoutItem) -> Self {
        Self {
            name: value.name.clone(),
            sets: value.sets,
            target: value.target.clone(),
            rest_seconds: value.rest_seconds,
            video: value.video.clone(),
            instructions: value.instructions.clone(),
            image: value.image.clone(),
            circuit: value.circuit.as_ref().map(|c| Circuit {
                id: c.id.clone(),
                rounds: c.rounds,
            }),
            muscles: value.muscles.iter().map(ToString::to_string).collect(),
            exercise_id: value.exercise_id.as_ref().map(ToString::to_string),
        }
    }
}

impl TryFrom<WorkoutItem> for domain::WorkoutItem {
    type Error = domain::MuscleGroupError;

    fn try_from(value: WorkoutItem) -> Result<Self, Self::Error> {
        Ok(Self {
            muscles: value
                .muscles
                .iter()
                .map(|m| domain::MuscleGroup::try_from(m.as_str()))
                .collect::<Result<Vec<_>, _>>()?,
            name: value.name,
            sets: value.sets,
            target: value.target,
            rest_seconds: value.rest_seconds,
            video: value.video,
            instructions: value.instructions,
            image: value.image,
            circuit: value.circuit.map(|c| domain::Circuit {
                id: c.id,
                rounds: c.rounds,
            }),
            exercise_id: value.exercise_id.as_deref().map(domain::ExerciseID::new),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    pub id: String,
    pub rounds: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Performance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_name: String,
    pub exercise_id: Option<String>,
    pub weight: f32,
    pub reps: u32,
    pub sets: u32,
    pub date: DateTime<Utc>,
    pub workout_id: Option<Uuid>,
    pub notes: Option<String>,
}

impl From<&domain::Performance> for Performance {
    fn from(value: &domain::Performance) -> Self {
        Self {
            id: *value.id,
            user_id: *value.user_id,
            exercise_name: value.exercise_name.clone(),
            exercise_id: value.exercise_id.as_ref().map(ToString::to_string),
            weight: value.weight,
            reps: value.reps,
            sets: value.sets,
            date: value.date,
            workout_id: value.workout_id.map(|id| *id),
            notes: value.notes.clone(),
        }
    }
}

impl From<Performance> for domain::Performance {
    fn from(value: Performance) -> Self {
        Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            exercise_id: value.exercise_id.as_deref().map(domain::ExerciseID::new),
            exercise_name: value.exercise_name,
            weight: value.weight,
            reps: value.reps,
            sets: value.sets,
            date: value.date,
            workout_id: value.workout_id.map(domain::SavedWorkoutID::from),
            notes: value.notes,
        }
    }
}
