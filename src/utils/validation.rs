use crate::utils::error::{RestaurantError, Result};
use chrono::NaiveTime;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RestaurantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 營業時間不支援跨午夜，開門時間必須早於打烊時間
pub fn validate_opening_hours(
    field_name: &str,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
) -> Result<()> {
    if opening_time >= closing_time {
        return Err(RestaurantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}-{}", opening_time, closing_time),
            reason: "Opening time must be earlier than closing time".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(RestaurantError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

/// 解析 `HH:MM` 或 `HH:MM:SS` 格式的時間
pub fn parse_time_of_day(field_name: &str, value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|e| RestaurantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid time of day: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("restaurant.name", "Amelie's cafe").is_ok());
        assert!(validate_non_empty_string("restaurant.name", "").is_err());
        assert!(validate_non_empty_string("restaurant.name", "   ").is_err());
    }

    #[test]
    fn test_validate_opening_hours() {
        assert!(validate_opening_hours("restaurant", t(10, 30), t(22, 0)).is_ok());
        assert!(validate_opening_hours("restaurant", t(22, 0), t(10, 30)).is_err());
        assert!(validate_opening_hours("restaurant", t(10, 30), t(10, 30)).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("menu", ["Soup", "Lasagne"]).is_ok());
        assert!(validate_unique_names("menu", ["Soup", "Lasagne", "Soup"]).is_err());
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("at", "13:00").unwrap(), t(13, 0));
        assert_eq!(parse_time_of_day("at", "10:30:00").unwrap(), t(10, 30));
        assert!(parse_time_of_day("at", "25:00").is_err());
        assert!(parse_time_of_day("at", "noon").is_err());
    }
}
