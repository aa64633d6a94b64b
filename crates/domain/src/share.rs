use derive_more::{AsRef, Display};

use crate::{CreateError, RandomSource, ReadError, WorkoutPlan};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[allow(async_fn_in_trait)]
pub trait ShareService {
    /// Store the plan under a new unique code.
    async fn share_workout(&self, plan: WorkoutPlan) -> Result<ShareCode, CreateError>;
    async fn get_shared_workout(&self, code: &ShareCode) -> Result<WorkoutPlan, ReadError>;

    fn validate_share_code(&self, code: &str) -> Result<ShareCode, ShareCodeError> {
        ShareCode::new(code)
    }
}

#[allow(async_fn_in_trait)]
pub trait ShareRepository {
    async fn contains_shared_workout(&self, code: &ShareCode) -> Result<bool, ReadError>;
    async fn write_shared_workout(
        &self,
        code: &ShareCode,
        plan: WorkoutPlan,
    ) -> Result<ShareCode, CreateError>;
    async fn read_shared_workout(&self, code: &ShareCode) -> Result<WorkoutPlan, ReadError>;
}

#[derive(AsRef, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCode(String);

impl ShareCode {
    pub const LENGTH: usize = 6;

    pub fn new(code: &str) -> Result<Self, ShareCodeError> {
        let code = code.trim();

        if code.chars().count() != Self::LENGTH {
            return Err(ShareCodeError::InvalidLength(code.chars().count()));
        }

        if let Some(c) = code.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(ShareCodeError::InvalidCharacter(c));
        }

        Ok(Self(code.to_string()))
    }

    #[must_use]
    pub fn generate(random: &mut impl RandomSource) -> Self {
        Self(
            (0..Self::LENGTH)
                .map(|_| char::from(ALPHABET[random.next_index(ALPHABET.len())]))
                .collect(),
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ShareCodeError {
    #[error("Share code must have 6 characters ({0} != 6)")]
    InvalidLength(usize),
    #[error("Share code must only contain letters and digits ('{0}')")]
    InvalidCharacter(char),
}
