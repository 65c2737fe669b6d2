pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clock::{FixedClock, SystemClock};
pub use config::toml_config::TomlConfig;
pub use core::restaurant::Restaurant;
pub use domain::model::{Item, OpeningHours};
pub use domain::ports::Clock;
pub use utils::error::{RestaurantError, Result};
