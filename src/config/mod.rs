pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use chrono::NaiveTime;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "restaurant-menu")]
    #[command(about = "Inspect a restaurant's menu, opening hours and order totals")]
    pub struct CliConfig {
        /// Path to the restaurant TOML file
        #[arg(short, long, default_value = "restaurant.toml")]
        pub config: String,

        /// Time of day to check (HH:MM or HH:MM:SS), defaults to the local clock
        #[arg(long)]
        pub at: Option<String>,

        /// Menu item names to total up
        #[arg(short, long, value_delimiter = ',')]
        pub order: Vec<String>,

        #[arg(long, help = "Print the report as JSON")]
        pub json: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn check_time(&self) -> Result<Option<NaiveTime>> {
            self.at
                .as_deref()
                .map(|at| validation::parse_time_of_day("at", at))
                .transpose()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_non_empty_string("config", &self.config)?;
            self.check_time()?;
            for name in &self.order {
                validation::validate_non_empty_string("order", name)?;
            }
            Ok(())
        }
    }

}
