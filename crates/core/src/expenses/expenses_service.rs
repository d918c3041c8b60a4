use log::debug;
use std::sync::Arc;

use super::expenses_model::{non_blank, Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::budgets::{Budget, BudgetRepositoryTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};

/// Service for logging and editing expenses.
///
/// Ownership is enforced through the parent budget.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            budget_repository,
            category_repository,
        }
    }

    fn owned_budget(&self, user_id: &str, budget_id: &str) -> Result<Budget> {
        self.budget_repository
            .get_by_id(user_id, budget_id)?
            .ok_or_else(|| Error::not_found("Budget not found."))
    }

    fn owned_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        let expense = self
            .repository
            .get_by_id(expense_id)?
            .ok_or_else(|| Error::not_found("Expense not found."))?;
        self.owned_budget(user_id, &expense.budget_id)
            .map_err(|_| Error::not_found("Expense not found."))?;
        Ok(expense)
    }

    /// Same rule as CSV import: only categories in the user's picker are accepted.
    fn ensure_category_visible(&self, user_id: &str, category_id: &str) -> Result<()> {
        let visible = self
            .category_repository
            .list_visible(user_id)?
            .iter()
            .any(|c| c.id == category_id);
        if !visible {
            return Err(Error::invalid("Unknown category."));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn add_expense(
        &self,
        user_id: &str,
        budget_id: &str,
        new_expense: NewExpense,
    ) -> Result<Expense> {
        let new_expense = new_expense.normalized()?;
        let budget = self.owned_budget(user_id, budget_id)?;
        if let Some(category_id) = &new_expense.category_id {
            self.ensure_category_visible(user_id, category_id)?;
        }
        debug!(
            "Adding expense '{}' ({}) to budget {}",
            new_expense.description, new_expense.amount, budget.id
        );
        self.repository
            .insert_new_expense(budget.id, new_expense)
            .await
    }

    fn get_expenses_by_budget_id(&self, user_id: &str, budget_id: &str) -> Result<Vec<Expense>> {
        if self.budget_repository.get_by_id(user_id, budget_id)?.is_none() {
            return Ok(Vec::new());
        }
        self.repository.list_by_budget(budget_id)
    }

    async fn update_expense_category(
        &self,
        user_id: &str,
        expense_id: &str,
        category_id: Option<String>,
    ) -> Result<Expense> {
        let expense = self.owned_expense(user_id, expense_id)?;
        let category_id = non_blank(category_id);
        if let Some(id) = &category_id {
            self.ensure_category_visible(user_id, id)?;
        }
        self.repository
            .update_category(expense.id, category_id)
            .await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let expense = self.owned_expense(user_id, expense_id)?;
        self.repository.delete_expense(expense.id).await?;
        Ok(())
    }
}
