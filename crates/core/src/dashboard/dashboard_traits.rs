use super::dashboard_model::{BudgetDetailView, DashboardView};
use crate::errors::Result;

/// Assembles the read-only screens from budgets, expenses and categories.
pub trait DashboardServiceTrait: Send + Sync {
    /// `budget_id` selects a month, `view_year` the year shown in the grid.
    fn get_dashboard(
        &self,
        user_id: &str,
        budget_id: Option<&str>,
        view_year: Option<i32>,
    ) -> Result<DashboardView>;

    /// `None` when the budget does not exist or belongs to another user.
    fn get_budget_detail(&self, user_id: &str, budget_id: &str)
        -> Result<Option<BudgetDetailView>>;
}
