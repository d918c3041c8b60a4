use chrono::{Datelike, Local};

use crate::constants::{MAX_BUDGET_YEAR, MIN_BUDGET_YEAR};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month name for a 1-based month, `None` outside 1..=12.
pub fn month_name(month: i32) -> Option<&'static str> {
    month_index(month).map(|i| MONTH_NAMES[i])
}

/// Three-letter month name for a 1-based month.
pub fn month_abbrev(month: i32) -> Option<&'static str> {
    month_index(month).map(|i| MONTH_ABBREV[i])
}

fn month_index(month: i32) -> Option<usize> {
    if (1..=12).contains(&month) {
        Some((month - 1) as usize)
    } else {
        None
    }
}

pub fn is_valid_month(month: i32) -> bool {
    (1..=12).contains(&month)
}

pub fn is_valid_budget_year(year: i32) -> bool {
    (MIN_BUDGET_YEAR..=MAX_BUDGET_YEAR).contains(&year)
}

pub fn clamp_budget_year(year: i32) -> i32 {
    year.clamp(MIN_BUDGET_YEAR, MAX_BUDGET_YEAR)
}

/// "January 2025"
pub fn format_month_year(month: i32, year: i32) -> String {
    match month_name(month) {
        Some(name) => format!("{} {}", name, year),
        None => year.to_string(),
    }
}

/// "Jan 2025"
pub fn format_month_year_short(month: i32, year: i32) -> String {
    match month_abbrev(month) {
        Some(abbrev) => format!("{} {}", abbrev, year),
        None => year.to_string(),
    }
}

/// The calendar month before `(month, year)`; January wraps to December.
pub fn previous_month(month: i32, year: i32) -> (i32, i32) {
    if month <= 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Local (month, year) right now.
pub fn current_month_year() -> (i32, i32) {
    let today = Local::now().date_naive();
    (today.month() as i32, today.year())
}
