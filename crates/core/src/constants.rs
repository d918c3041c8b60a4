/// Earliest year a budget can be created for.
pub const MIN_BUDGET_YEAR: i32 = 2000;

/// Latest year a budget can be created for.
pub const MAX_BUDGET_YEAR: i32 = 2100;

/// Name of the global fallback category.
pub const MISC_CATEGORY_NAME: &str = "Misc";

/// Colors a payment source may be tagged with.
pub const PAYMENT_SOURCE_COLORS: [&str; 6] = [
    "#8B5CF6", "#06B6D4", "#F59E0B", "#F43F5E", "#10B981", "#3B82F6",
];

/// Neutral color used for a zero net amount.
pub const NET_ZERO_COLOR: &str = "#D5D5D5";

/// End of the gradient for positive net amounts (emerald).
pub const NET_POSITIVE_COLOR: &str = "#34D399";

/// End of the gradient for negative net amounts (rose).
pub const NET_NEGATIVE_COLOR: &str = "#FB7185";

pub const NEEDS_COLOR: &str = "#06B6D4";
pub const WANTS_COLOR: &str = "#F59E0B";
pub const MISC_COLOR: &str = "#737373";

/// Category slice colors for the donut chart, assigned by position.
pub const DONUT_PALETTE: [&str; 15] = [
    "#D946EF", "#6366F1", "#14B8A6", "#F97316", "#84CC16", "#EC4899", "#64748B", "#8B5CF6",
    "#06B6D4", "#F59E0B", "#F43F5E", "#10B981", "#3B82F6", "#06B6D4", "#F59E0B",
];

pub const MIN_PASSWORD_LENGTH: usize = 8;
