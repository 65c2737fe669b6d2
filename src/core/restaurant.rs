use crate::domain::model::{Item, OpeningHours};
use crate::domain::ports::Clock;
use crate::utils::error::{RestaurantError, Result};
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    name: String,
    location: String,
    #[serde(flatten)]
    hours: OpeningHours,
    menu: Vec<Item>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            hours: OpeningHours::new(opening_time, closing_time),
            menu: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.hours.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.hours.closing_time
    }

    /// `opening_time <= current_time < closing_time`
    pub fn is_open(&self, current_time: NaiveTime) -> bool {
        self.hours.contains(current_time)
    }

    pub fn is_open_now<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.is_open(clock.now())
    }

    pub fn menu(&self) -> &[Item] {
        &self.menu
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.menu.iter().find(|item| item.name() == name)
    }

    /// 新增菜單項目，名稱重複時拒絕且不修改菜單
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) -> Result<()> {
        let name = name.into();
        if self.find_item(&name).is_some() {
            return Err(RestaurantError::DuplicateItem { name });
        }

        tracing::debug!("Adding '{}' ({}) to menu of {}", name, price, self.name);
        self.menu.push(Item::new(name, price));
        Ok(())
    }

    pub fn remove_from_menu(&mut self, name: &str) -> Result<Item> {
        let index = self
            .menu
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| RestaurantError::ItemNotFound {
                name: name.to_string(),
            })?;

        tracing::debug!("Removing '{}' from menu of {}", name, self.name);
        Ok(self.menu.remove(index))
    }

    /// Resolves item names against the current menu, keeping the caller's order.
    pub fn select_items<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Item>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.find_item(name)
                    .cloned()
                    .ok_or_else(|| RestaurantError::ItemNotFound {
                        name: name.to_string(),
                    })
            })
            .collect()
    }

    /// Sums the prices of `items`. Does not look at the live menu.
    pub fn order_value(&self, items: &[Item]) -> Result<u64> {
        if items.is_empty() {
            return Err(RestaurantError::NoItemSelected);
        }

        Ok(items.iter().map(|item| u64::from(item.price())).sum())
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Opening time: {}", self.hours.opening_time)?;
        writeln!(f, "Closing time: {}", self.hours.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n  {}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn cafe() -> Restaurant {
        let mut restaurant = Restaurant::new("Amelie's cafe", "Chennai", t(10, 30), t(22, 0));
        restaurant.add_to_menu("Sweet corn soup", 119).unwrap();
        restaurant.add_to_menu("Vegetable lasagne", 269).unwrap();
        restaurant
    }

    #[test]
    fn test_is_open_now_reads_clock() {
        let restaurant = cafe();
        assert!(restaurant.is_open_now(&FixedClock(t(13, 0))));
        assert!(!restaurant.is_open_now(&FixedClock(t(23, 0))));
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut restaurant = cafe();
        let err = restaurant.add_to_menu("Sweet corn soup", 99).unwrap_err();

        assert!(matches!(err, RestaurantError::DuplicateItem { ref name } if name == "Sweet corn soup"));
        assert_eq!(restaurant.menu().len(), 2);
        assert_eq!(restaurant.find_item("Sweet corn soup").unwrap().price(), 119);
    }

    #[test]
    fn test_remove_returns_item_and_keeps_order() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Sizzling brownie", 319).unwrap();

        let removed = restaurant.remove_from_menu("Vegetable lasagne").unwrap();
        assert_eq!(removed, Item::new("Vegetable lasagne", 269));

        let names: Vec<&str> = restaurant.menu().iter().map(Item::name).collect();
        assert_eq!(names, vec!["Sweet corn soup", "Sizzling brownie"]);
    }

    #[test]
    fn test_select_items() {
        let restaurant = cafe();

        let items = restaurant
            .select_items(&["Vegetable lasagne", "Sweet corn soup", "Vegetable lasagne"])
            .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name(), "Vegetable lasagne");
        assert_eq!(restaurant.order_value(&items).unwrap(), 269 + 119 + 269);

        let err = restaurant.select_items(&["French fries"]).unwrap_err();
        assert!(matches!(err, RestaurantError::ItemNotFound { .. }));
    }

    #[test]
    fn test_display_details() {
        let details = cafe().to_string();
        assert!(details.contains("Restaurant: Amelie's cafe"));
        assert!(details.contains("Location: Chennai"));
        assert!(details.contains("Opening time: 10:30:00"));
        assert!(details.contains("  Vegetable lasagne: 269"));
    }

    #[test]
    fn test_serialize_to_json() {
        let json = serde_json::to_value(cafe()).unwrap();
        assert_eq!(json["name"], "Amelie's cafe");
        assert_eq!(json["opening_time"], "10:30:00");
        assert_eq!(json["menu"][1]["price"], 269);
    }
}
