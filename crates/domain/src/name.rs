use derive_more::{AsRef, Display};

/// Name under which a workout is saved.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Maximum number of characters, counted after trimming.
    pub const MAX_LENGTH: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        match name.chars().count() {
            0 => Err(NameError::Empty),
            len if len > Self::MAX_LENGTH => Err(NameError::TooLong(len)),
            _ => Ok(Self(name.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Give the workout a name")]
    Empty,
    #[error("Workout name is too long ({0} characters, at most 64 allowed)")]
    TooLong(usize),
}
