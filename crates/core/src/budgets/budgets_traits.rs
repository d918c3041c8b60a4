use crate::budgets::budgets_model::{Budget, BudgetWithNetIncome, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations.
///
/// Every query is scoped to the owning user.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Budgets ordered newest period first (year desc, month desc).
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn get_by_id(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>>;
    async fn insert_new_budget(&self, user_id: String, new_budget: NewBudget) -> Result<Budget>;
    async fn update_income(
        &self,
        user_id: String,
        budget_id: String,
        income: f64,
    ) -> Result<Budget>;
    async fn delete_budget(&self, user_id: String, budget_id: String) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn get_budgets_with_net_income(&self, user_id: &str) -> Result<Vec<BudgetWithNetIncome>>;
    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>>;
    async fn update_budget_income(
        &self,
        user_id: &str,
        budget_id: &str,
        income: f64,
    ) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;
}
