use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, priced menu entry. Price is in currency minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

/// Half-open daily window `[opening_time, closing_time)`. No overnight wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl OpeningHours {
    pub fn new(opening_time: NaiveTime, closing_time: NaiveTime) -> Self {
        Self {
            opening_time,
            closing_time,
        }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.opening_time <= time && time < self.closing_time
    }
}
