use crate::core::restaurant::Restaurant;
use crate::utils::error::{RestaurantError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub restaurant: RestaurantConfig,
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price: u32,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RestaurantError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESTAURANT_NAME})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RestaurantError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("restaurant.name", &self.restaurant.name)?;
        validation::validate_non_empty_string("restaurant.location", &self.restaurant.location)?;

        let opening_time =
            validation::parse_time_of_day("restaurant.opening_time", &self.restaurant.opening_time)?;
        let closing_time =
            validation::parse_time_of_day("restaurant.closing_time", &self.restaurant.closing_time)?;
        validation::validate_opening_hours("restaurant", opening_time, closing_time)?;

        for item in &self.menu {
            validation::validate_non_empty_string("menu.name", &item.name)?;
        }
        validation::validate_unique_names("menu.name", self.menu.iter().map(|i| i.name.as_str()))?;

        Ok(())
    }

    /// 依配置建立餐廳，菜單順序與檔案一致
    pub fn build_restaurant(&self) -> Result<Restaurant> {
        self.validate_config()?;

        let opening_time =
            validation::parse_time_of_day("restaurant.opening_time", &self.restaurant.opening_time)?;
        let closing_time =
            validation::parse_time_of_day("restaurant.closing_time", &self.restaurant.closing_time)?;

        let mut restaurant = Restaurant::new(
            self.restaurant.name.clone(),
            self.restaurant.location.clone(),
            opening_time,
            closing_time,
        );
        for item in &self.menu {
            restaurant.add_to_menu(item.name.clone(), item.price)?;
        }

        tracing::debug!(
            "Built restaurant '{}' with {} menu items",
            restaurant.name(),
            restaurant.menu().len()
        );
        Ok(restaurant)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
