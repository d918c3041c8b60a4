//! Series for the dashboard charts. Rendering is left to the client.

use serde::{Deserialize, Serialize};

use super::aggregation::{
    group_by_category, group_by_supercategory, needs_wants_split, CategoryTotal, NeedsWantsSplit,
    SupercategoryTotals,
};
use crate::budgets::BudgetWithNetIncome;
use crate::categories::{Category, Supercategory};
use crate::constants::DONUT_PALETTE;
use crate::expenses::Expense;
use crate::utils::time_utils::format_month_year_short;

/// Which slice of history a chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartScope {
    #[default]
    Month,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartPoint {
    /// "Jan 2025"
    pub month_year: String,
    pub month: i32,
    pub year: i32,
    pub income: f64,
    pub spent: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutSegment {
    pub name: String,
    pub value: f64,
    pub supercategory: Supercategory,
    pub fill: String,
    /// Outline color shared by every slice of the same supercategory.
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartEntry {
    pub name: String,
    pub value: f64,
    pub fill: String,
}

/// All chart inputs for one scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSet {
    pub scope: ChartScope,
    pub totals: SupercategoryTotals,
    pub needs_wants: NeedsWantsSplit,
    pub by_category: Vec<CategoryTotal>,
    pub donut: Vec<DonutSegment>,
    pub bars: Vec<BarChartEntry>,
}

/// Spending per month in chronological order.
pub fn build_line_chart_data(budgets: &[BudgetWithNetIncome]) -> Vec<LineChartPoint> {
    let mut sorted: Vec<&BudgetWithNetIncome> = budgets.iter().collect();
    sorted.sort_by_key(|b| (b.budget.year, b.budget.month));
    sorted
        .into_iter()
        .map(|b| LineChartPoint {
            month_year: format_month_year_short(b.budget.month, b.budget.year),
            month: b.budget.month,
            year: b.budget.year,
            income: b.budget.income,
            spent: b.spent(),
            net_income: b.net_income,
        })
        .collect()
}

/// Category slices grouped needs, wants, misc and largest first within a group.
pub fn build_donut_chart_data(totals: &[CategoryTotal]) -> Vec<DonutSegment> {
    let mut sorted: Vec<&CategoryTotal> = totals.iter().filter(|t| t.amount > 0.0).collect();
    sorted.sort_by(|a, b| {
        a.supercategory
            .rank()
            .cmp(&b.supercategory.rank())
            .then_with(|| b.amount.total_cmp(&a.amount))
    });
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, t)| DonutSegment {
            name: t.category_name.clone(),
            value: t.amount,
            supercategory: t.supercategory,
            fill: DONUT_PALETTE[i % DONUT_PALETTE.len()].to_string(),
            stroke: t.supercategory.color().to_string(),
        })
        .collect()
}

/// One bar per supercategory with spending; zero bars are omitted.
pub fn build_bar_chart_data(totals: &SupercategoryTotals) -> Vec<BarChartEntry> {
    Supercategory::ALL
        .iter()
        .map(|s| BarChartEntry {
            name: s.label().to_string(),
            value: totals.get(*s),
            fill: s.color().to_string(),
        })
        .filter(|entry| entry.value > 0.0)
        .collect()
}

pub fn build_chart_set(
    scope: ChartScope,
    expenses: &[Expense],
    categories: &[Category],
) -> ChartSet {
    let totals = group_by_supercategory(expenses, categories);
    let by_category = group_by_category(expenses, categories);
    ChartSet {
        scope,
        needs_wants: needs_wants_split(&totals),
        donut: build_donut_chart_data(&by_category),
        bars: build_bar_chart_data(&totals),
        by_category,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::Budget;
    use crate::constants::{MISC_COLOR, NEEDS_COLOR, WANTS_COLOR};
    use chrono::NaiveDateTime;

    fn budget(month: i32, year: i32, income: f64, net_income: f64) -> BudgetWithNetIncome {
        BudgetWithNetIncome {
            budget: Budget {
                id: format!("{}-{}", year, month),
                user_id: "u1".into(),
                month,
                year,
                income,
                created_at: NaiveDateTime::default(),
            },
            net_income,
        }
    }

    fn total(name: &str, supercategory: Supercategory, amount: f64) -> CategoryTotal {
        CategoryTotal {
            category_name: name.into(),
            supercategory,
            amount,
        }
    }

    #[test]
    fn test_line_chart_is_chronological() {
        let points = build_line_chart_data(&[
            budget(2, 2025, 3000.0, 500.0),
            budget(12, 2024, 2000.0, -100.0),
            budget(1, 2025, 2500.0, 2500.0),
        ]);
        let labels: Vec<&str> = points.iter().map(|p| p.month_year.as_str()).collect();
        assert_eq!(labels, vec!["Dec 2024", "Jan 2025", "Feb 2025"]);
        assert_eq!(points[0].spent, 2100.0);
        assert_eq!(points[1].spent, 0.0);
        assert_eq!(points[2].spent, 2500.0);
    }

    #[test]
    fn test_donut_orders_by_supercategory_then_amount() {
        let segments = build_donut_chart_data(&[
            total("Misc", Supercategory::Misc, 500.0),
            total("Travel", Supercategory::Wants, 300.0),
            total("Groceries", Supercategory::Needs, 200.0),
            total("Rent", Supercategory::Needs, 1000.0),
            total("Gifts", Supercategory::Wants, 0.0),
        ]);
        let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Groceries", "Travel", "Misc"]);
        assert_eq!(segments[0].fill, DONUT_PALETTE[0]);
        assert_eq!(segments[3].fill, DONUT_PALETTE[3]);
        assert_eq!(segments[0].stroke, NEEDS_COLOR);
        assert_eq!(segments[2].stroke, WANTS_COLOR);
        assert_eq!(segments[3].stroke, MISC_COLOR);
    }

    #[test]
    fn test_donut_palette_wraps() {
        let totals: Vec<CategoryTotal> = (0..17)
            .map(|i| total(&format!("C{}", i), Supercategory::Wants, 100.0 - i as f64))
            .collect();
        let segments = build_donut_chart_data(&totals);
        assert_eq!(segments[15].fill, DONUT_PALETTE[0]);
        assert_eq!(segments[16].fill, DONUT_PALETTE[1]);
    }

    #[test]
    fn test_bar_chart_omits_zero_values() {
        let bars = build_bar_chart_data(&SupercategoryTotals {
            needs: 100.0,
            wants: 0.0,
            misc: 25.0,
        });
        let names: Vec<&str> = bars.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Needs", "Misc"]);
        assert_eq!(bars[1].fill, MISC_COLOR);

        let none = build_bar_chart_data(&SupercategoryTotals::default());
        assert!(none.is_empty());
    }
}
