pub mod format;
pub mod time_utils;

pub use format::{format_currency, format_signed_currency, round_to_cents};
pub use time_utils::{
    current_month_year, format_month_year, format_month_year_short, month_abbrev, month_name,
    previous_month,
};
