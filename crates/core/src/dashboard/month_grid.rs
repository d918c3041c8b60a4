use super::dashboard_model::{MonthCell, YearMonthGrid};
use crate::budgets::BudgetWithNetIncome;
use crate::constants::NET_ZERO_COLOR;
use crate::summary::{net_amount_gradient_color, NetIndicator};
use crate::utils::format_signed_currency;
use crate::utils::time_utils::{clamp_budget_year, month_abbrev};

/// Picks the budget the dashboard opens on.
///
/// The requested budget wins when it exists, then the budget for `today`,
/// then the most recent one. `budgets` must be ordered newest first.
pub fn select_budget<'a>(
    budgets: &'a [BudgetWithNetIncome],
    requested_id: Option<&str>,
    today: (i32, i32),
) -> Option<&'a BudgetWithNetIncome> {
    let (month, year) = today;
    requested_id
        .and_then(|id| budgets.iter().find(|b| b.budget.id == id))
        .or_else(|| {
            budgets
                .iter()
                .find(|b| b.budget.month == month && b.budget.year == year)
        })
        .or_else(|| budgets.first())
}

/// Navigable year range: budget years plus the current year, clamped to valid budget years.
pub fn year_range(budgets: &[BudgetWithNetIncome], current_year: i32) -> (i32, i32) {
    let years = budgets.iter().map(|b| b.budget.year);
    let min = years.clone().chain([current_year]).min().unwrap_or(current_year);
    let max = years.chain([current_year]).max().unwrap_or(current_year);
    (clamp_budget_year(min), clamp_budget_year(max))
}

pub fn build_month_grid(
    budgets: &[BudgetWithNetIncome],
    view_year: i32,
    selected_budget_id: Option<&str>,
    current_year: i32,
) -> YearMonthGrid {
    let (year_min, year_max) = year_range(budgets, current_year);
    let view_year = view_year.clamp(year_min, year_max);

    let min_net = budgets
        .iter()
        .map(|b| b.net_income)
        .fold(None, |acc: Option<f64>, n| Some(acc.map_or(n, |a| a.min(n))))
        .unwrap_or(0.0);
    let max_net = budgets
        .iter()
        .map(|b| b.net_income)
        .fold(None, |acc: Option<f64>, n| Some(acc.map_or(n, |a| a.max(n))))
        .unwrap_or(0.0);

    let cells = (1..=12)
        .map(|month| {
            let label = month_abbrev(month).unwrap_or_default().to_uppercase();
            let budget = budgets
                .iter()
                .find(|b| b.budget.month == month && b.budget.year == view_year);
            match budget {
                Some(b) => MonthCell {
                    month,
                    year: view_year,
                    label,
                    budget_id: Some(b.budget.id.clone()),
                    net_income: Some(b.net_income),
                    color: Some(net_amount_gradient_color(
                        b.net_income,
                        min_net,
                        max_net,
                        NET_ZERO_COLOR,
                    )),
                    formatted_net: Some(format_signed_currency(b.net_income)),
                    indicator: Some(NetIndicator::for_net(b.net_income)),
                    is_selected: selected_budget_id == Some(b.budget.id.as_str()),
                },
                None => MonthCell {
                    month,
                    year: view_year,
                    label,
                    budget_id: None,
                    net_income: None,
                    color: None,
                    formatted_net: None,
                    indicator: None,
                    is_selected: false,
                },
            }
        })
        .collect();

    YearMonthGrid {
        view_year,
        year_min,
        year_max,
        cells,
    }
}
