use log::{debug, info};
use std::sync::Arc;

use super::budgets_model::{is_valid_income, Budget, BudgetWithNetIncome, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;

/// Service for managing monthly budgets
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            expense_repository,
        }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        debug!(
            "Creating budget {}/{} for user {}",
            new_budget.month, new_budget.year, user_id
        );
        let budget = self
            .repository
            .insert_new_budget(user_id.to_string(), new_budget)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::ConstraintViolation("You already have a budget for this month.".into())
                } else {
                    e
                }
            })?;
        info!("Created budget {} ({})", budget.id, budget.title());
        Ok(budget)
    }

    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_by_user(user_id)
    }

    fn get_budgets_with_net_income(&self, user_id: &str) -> Result<Vec<BudgetWithNetIncome>> {
        let budgets = self.repository.list_by_user(user_id)?;
        let ids: Vec<String> = budgets.iter().map(|b| b.id.clone()).collect();
        let spent = self.expense_repository.sum_by_budgets(&ids)?;
        Ok(budgets
            .into_iter()
            .map(|budget| {
                let total = spent.get(&budget.id).copied().unwrap_or(0.0);
                BudgetWithNetIncome {
                    net_income: budget.income - total,
                    budget,
                }
            })
            .collect())
    }

    fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>> {
        self.repository.get_by_id(user_id, budget_id)
    }

    async fn update_budget_income(
        &self,
        user_id: &str,
        budget_id: &str,
        income: f64,
    ) -> Result<Budget> {
        if !is_valid_income(income) {
            return Err(Error::invalid("Invalid income."));
        }
        self.repository
            .update_income(user_id.to_string(), budget_id.to_string(), income)
            .await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete_budget(user_id.to_string(), budget_id.to_string())
            .await?;
        if deleted == 0 {
            return Err(Error::not_found("Budget not found."));
        }
        info!("Deleted budget {}", budget_id);
        Ok(())
    }
}
