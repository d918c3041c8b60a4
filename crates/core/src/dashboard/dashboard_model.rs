//! View models for the dashboard and budget detail screens.

use serde::{Deserialize, Serialize};

use crate::budgets::{Budget, BudgetWithNetIncome};
use crate::categories::Category;
use crate::expenses::Expense;
use crate::insights::Insight;
use crate::payment_sources::PaymentSource;
use crate::summary::{CategoryTotal, ChartSet, LineChartPoint, NetIndicator, SupercategoryTotals};

/// One month of the year grid. Budget fields are empty when the month has no budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub month: i32,
    pub year: i32,
    /// "JAN"
    pub label: String,
    pub budget_id: Option<String>,
    pub net_income: Option<f64>,
    pub color: Option<String>,
    /// "+$120.00"
    pub formatted_net: Option<String>,
    pub indicator: Option<NetIndicator>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearMonthGrid {
    pub view_year: i32,
    pub year_min: i32,
    pub year_max: i32,
    pub cells: Vec<MonthCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub budgets: Vec<BudgetWithNetIncome>,
    pub selected_budget: Option<BudgetWithNetIncome>,
    pub selected_title: Option<String>,
    pub month_grid: YearMonthGrid,
    pub spending_over_time: Vec<LineChartPoint>,
    pub month_charts: ChartSet,
    pub all_time_charts: ChartSet,
    pub insights: Vec<Insight>,
    pub has_previous_month: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDetailView {
    pub budget: Budget,
    /// "March 2025"
    pub title: String,
    pub expenses: Vec<Expense>,
    pub spent: f64,
    pub remaining: f64,
    pub totals: SupercategoryTotals,
    pub by_category: Vec<CategoryTotal>,
    pub payment_sources: Vec<PaymentSource>,
    pub categories: Vec<Category>,
}
