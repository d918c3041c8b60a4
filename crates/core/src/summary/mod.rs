//! Pure aggregation over budgets and expenses: totals, breakdowns, colors and chart series.

mod aggregation;
mod charts;
mod colors;

pub use aggregation::{
    group_by_category, group_by_supercategory, needs_wants_split, total_spent, CategoryTotal,
    NeedsWantsSplit, SupercategoryTotals,
};
pub use charts::{
    build_bar_chart_data, build_chart_set, build_donut_chart_data, build_line_chart_data,
    BarChartEntry, ChartScope, ChartSet, DonutSegment, LineChartPoint,
};
pub use colors::{net_amount_gradient_color, NetIndicator};
