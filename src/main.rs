use anyhow::Context;
use chrono::NaiveTime;
use clap::Parser;
use restaurant_menu::utils::{logger, validation::Validate};
use restaurant_menu::{CliConfig, Clock, FixedClock, Item, Restaurant, SystemClock, TomlConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    restaurant: &'a Restaurant,
    checked_at: NaiveTime,
    open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Order>,
}

#[derive(Debug, Serialize)]
struct Order {
    items: Vec<Item>,
    total: u64,
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    tracing::debug!("CLI config: {:?}", config);
    config.validate().context("Invalid command line arguments")?;

    let toml_config = TomlConfig::from_file(&config.config)
        .with_context(|| format!("Failed to load config file '{}'", config.config))?;
    let restaurant = toml_config.build_restaurant()?;
    tracing::info!("📁 Loaded {} from {}", restaurant.name(), config.config);

    let clock: Box<dyn Clock> = match config.check_time()? {
        Some(time) => Box::new(FixedClock(time)),
        None => Box::new(SystemClock),
    };
    let checked_at = clock.now();
    let open = restaurant.is_open(checked_at);

    let order = if config.order.is_empty() {
        None
    } else {
        let items = restaurant.select_items(config.order.as_slice())?;
        let total = restaurant.order_value(&items)?;
        Some(Order { items, total })
    };

    let report = Report {
        restaurant: &restaurant,
        checked_at,
        open,
        order,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.restaurant);
        println!();
        println!(
            "{} at {}",
            if report.open { "Open" } else { "Closed" },
            report.checked_at.format("%H:%M:%S")
        );
        if let Some(order) = &report.order {
            println!("Order value: {}", order.total);
        }
    }

    Ok(())
}
