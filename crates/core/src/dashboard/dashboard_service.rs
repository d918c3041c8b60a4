use log::debug;
use std::sync::Arc;

use super::dashboard_model::{BudgetDetailView, DashboardView};
use super::dashboard_traits::DashboardServiceTrait;
use super::month_grid::{build_month_grid, select_budget};
use crate::budgets::{BudgetServiceTrait, BudgetWithNetIncome};
use crate::categories::{Category, CategoryServiceTrait};
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::insights::{generate_monthly_insights, MonthSnapshot};
use crate::payment_sources::PaymentSourceRepositoryTrait;
use crate::summary::{
    build_chart_set, build_line_chart_data, group_by_category, group_by_supercategory, total_spent,
    ChartScope,
};
use crate::utils::time_utils::{current_month_year, previous_month};

pub struct DashboardService {
    budget_service: Arc<dyn BudgetServiceTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    payment_source_repository: Arc<dyn PaymentSourceRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        budget_service: Arc<dyn BudgetServiceTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        payment_source_repository: Arc<dyn PaymentSourceRepositoryTrait>,
    ) -> Self {
        Self {
            budget_service,
            category_service,
            expense_repository,
            payment_source_repository,
        }
    }

    /// Dashboard as seen on `today` (month, year).
    pub fn dashboard_for(
        &self,
        user_id: &str,
        budget_id: Option<&str>,
        view_year: Option<i32>,
        today: (i32, i32),
    ) -> Result<DashboardView> {
        let budgets = self.budget_service.get_budgets_with_net_income(user_id)?;
        let categories = self.category_service.get_resolvable_categories(user_id)?;
        let ids: Vec<String> = budgets.iter().map(|b| b.budget.id.clone()).collect();
        let all_expenses = self.expense_repository.list_by_budgets(&ids)?;

        let selected = select_budget(&budgets, budget_id, today).cloned();
        let selected_id = selected.as_ref().map(|b| b.budget.id.as_str());
        debug!(
            "Building dashboard for user {} ({} budgets, selected {:?})",
            user_id,
            budgets.len(),
            selected_id
        );

        let grid_year = view_year
            .or_else(|| selected.as_ref().map(|b| b.budget.year))
            .unwrap_or(today.1);
        let month_grid = build_month_grid(&budgets, grid_year, selected_id, today.1);

        let month_expenses = expenses_of(&all_expenses, selected_id);
        let month_charts = build_chart_set(ChartScope::Month, &month_expenses, &categories);
        let all_time_charts = build_chart_set(ChartScope::All, &all_expenses, &categories);

        let previous = selected
            .as_ref()
            .and_then(|s| find_previous(&budgets, s));
        let insights = match &selected {
            Some(current) => {
                let current_snapshot = snapshot(current, &month_expenses, &categories);
                let previous_snapshot = previous.map(|p| {
                    let expenses = expenses_of(&all_expenses, Some(p.budget.id.as_str()));
                    snapshot(p, &expenses, &categories)
                });
                generate_monthly_insights(&current_snapshot, previous_snapshot.as_ref())
            }
            None => Vec::new(),
        };

        Ok(DashboardView {
            spending_over_time: build_line_chart_data(&budgets),
            selected_title: selected.as_ref().map(|b| b.budget.title()),
            has_previous_month: previous.is_some(),
            selected_budget: selected,
            month_grid,
            month_charts,
            all_time_charts,
            insights,
            budgets,
        })
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(
        &self,
        user_id: &str,
        budget_id: Option<&str>,
        view_year: Option<i32>,
    ) -> Result<DashboardView> {
        self.dashboard_for(user_id, budget_id, view_year, current_month_year())
    }

    fn get_budget_detail(
        &self,
        user_id: &str,
        budget_id: &str,
    ) -> Result<Option<BudgetDetailView>> {
        let Some(budget) = self.budget_service.get_budget(user_id, budget_id)? else {
            return Ok(None);
        };
        let expenses = self.expense_repository.list_by_budget(&budget.id)?;
        let resolvable = self.category_service.get_resolvable_categories(user_id)?;
        let categories: Vec<Category> = self.category_service.get_categories(user_id)?;
        let payment_sources = self.payment_source_repository.list_by_user(user_id)?;

        let spent = total_spent(&expenses);
        Ok(Some(BudgetDetailView {
            title: budget.title(),
            remaining: budget.income - spent,
            totals: group_by_supercategory(&expenses, &resolvable),
            by_category: group_by_category(&expenses, &resolvable),
            spent,
            budget,
            expenses,
            payment_sources,
            categories,
        }))
    }
}

fn expenses_of(expenses: &[Expense], budget_id: Option<&str>) -> Vec<Expense> {
    match budget_id {
        Some(id) => expenses
            .iter()
            .filter(|e| e.budget_id == id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// The budget for the calendar month before `current`, if the user has one.
fn find_previous<'a>(
    budgets: &'a [BudgetWithNetIncome],
    current: &BudgetWithNetIncome,
) -> Option<&'a BudgetWithNetIncome> {
    let (month, year) = previous_month(current.budget.month, current.budget.year);
    budgets
        .iter()
        .find(|b| b.budget.month == month && b.budget.year == year)
}

fn snapshot(
    budget: &BudgetWithNetIncome,
    expenses: &[Expense],
    categories: &[Category],
) -> MonthSnapshot {
    MonthSnapshot::from_budget(&budget.budget, expenses, categories)
}
