use std::collections::HashMap;

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations.
///
/// Expenses are reached through their budget; callers check budget ownership.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses of one budget in insertion order.
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>>;
    fn list_by_budgets(&self, budget_ids: &[String]) -> Result<Vec<Expense>>;
    fn get_by_id(&self, expense_id: &str) -> Result<Option<Expense>>;
    /// Sum of expense amounts per budget id. Budgets without expenses are absent.
    fn sum_by_budgets(&self, budget_ids: &[String]) -> Result<HashMap<String, f64>>;
    async fn insert_new_expense(
        &self,
        budget_id: String,
        new_expense: NewExpense,
    ) -> Result<Expense>;
    async fn update_category(
        &self,
        expense_id: String,
        category_id: Option<String>,
    ) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: String) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn add_expense(
        &self,
        user_id: &str,
        budget_id: &str,
        new_expense: NewExpense,
    ) -> Result<Expense>;
    fn get_expenses_by_budget_id(&self, user_id: &str, budget_id: &str) -> Result<Vec<Expense>>;
    async fn update_expense_category(
        &self,
        user_id: &str,
        expense_id: &str,
        category_id: Option<String>,
    ) -> Result<Expense>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;
}
