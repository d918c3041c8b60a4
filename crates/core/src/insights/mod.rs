//! Month-over-month spending insights.

mod insights_model;
mod monthly_insights;

pub use insights_model::{Insight, InsightKind, MonthSnapshot};
pub use monthly_insights::generate_monthly_insights;
