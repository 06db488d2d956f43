use chrono::{Datelike, Local};

pub const EARLIEST_MODEL_YEAR: i32 = 1995;

/// Years from `end` down to `start`, inclusive. Empty when `start > end`.
pub fn year_range(start: i32, end: i32) -> Vec<i32> {
    (start..=end).rev().collect()
}

/// 1995 through next year's models.
pub fn default_year_range() -> Vec<i32> {
    year_range(EARLIEST_MODEL_YEAR, Local::now().year() + 1)
}
