#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod allocation;
mod composition;
mod equipment;
mod error;
mod exercise;
mod generator;
mod muscle;
mod name;
mod performance;
mod plan;
mod random;
mod saved_workout;
mod selection;
mod service;
mod share;
mod stretching;
mod user;
mod workout;

pub use allocation::*;
pub use composition::*;
pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use muscle::*;
pub use name::*;
pub use performance::*;
pub use plan::*;
pub use random::*;
pub use saved_workout::*;
pub use selection::*;
pub use service::*;
pub use share::*;
pub use stretching::*;
pub use user::*;
pub use workout::*;
