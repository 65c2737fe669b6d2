use chrono::NaiveTime;

/// Source of the current time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}
