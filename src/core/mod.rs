pub mod restaurant;

pub use crate::domain::model::{Item, OpeningHours};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
