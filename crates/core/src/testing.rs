//! In-memory repositories shared by the service tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use crate::categories::{Category, CategoryRepositoryTrait, NewCategory, Supercategory};
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use crate::imports::{ImportBatch, ImportLog, ImportRepositoryTrait};
use crate::payment_sources::{NewPaymentSource, PaymentSource, PaymentSourceRepositoryTrait};
use crate::users::{NewUser, User, UserCredentials, UserRepositoryTrait};

pub const USER: &str = "user-1";
pub const OTHER_USER: &str = "user-2";

/// Global categories as seeded by the database migration.
pub fn seeded_categories() -> Vec<Category> {
    [
        ("cat-rent", "Rent", Supercategory::Needs),
        ("cat-groceries", "Groceries", Supercategory::Needs),
        ("cat-restaurants", "Restaurants", Supercategory::Wants),
        ("cat-subscriptions", "Subscriptions", Supercategory::Wants),
        ("cat-misc", "Misc", Supercategory::Misc),
    ]
    .into_iter()
    .map(|(id, name, supercategory)| Category {
        id: id.to_string(),
        name: name.to_string(),
        supercategory,
        user_id: None,
    })
    .collect()
}

/// One store implementing every repository trait.
pub struct InMemoryDb {
    next_id: AtomicUsize,
    pub users: Mutex<Vec<UserCredentials>>,
    pub budgets: Mutex<Vec<Budget>>,
    pub expenses: Mutex<Vec<Expense>>,
    pub categories: Mutex<Vec<Category>>,
    pub hidden: Mutex<HashSet<(String, String)>>,
    pub payment_sources: Mutex<Vec<PaymentSource>>,
    pub import_logs: Mutex<Vec<ImportLog>>,
    /// Makes the next import fail, to check nothing is written.
    pub fail_imports: Mutex<bool>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(1),
            users: Mutex::new(Vec::new()),
            budgets: Mutex::new(Vec::new()),
            expenses: Mutex::new(Vec::new()),
            categories: Mutex::new(seeded_categories()),
            hidden: Mutex::new(HashSet::new()),
            payment_sources: Mutex::new(Vec::new()),
            import_logs: Mutex::new(Vec::new()),
            fail_imports: Mutex::new(false),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{:04}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn add_budget(&self, user_id: &str, month: i32, year: i32, income: f64) -> Budget {
        let budget = Budget {
            id: self.next_id("budget"),
            user_id: user_id.to_string(),
            month,
            year,
            income,
            created_at: NaiveDateTime::default(),
        };
        self.budgets.lock().unwrap().push(budget.clone());
        budget
    }

    pub fn add_expense(
        &self,
        budget_id: &str,
        description: &str,
        amount: f64,
        category_id: Option<&str>,
    ) -> Expense {
        self.push_expense(
            budget_id,
            description,
            amount,
            category_id.map(str::to_string),
            None,
        )
    }

    fn push_expense(
        &self,
        budget_id: &str,
        description: &str,
        amount: f64,
        category_id: Option<String>,
        payment_label: Option<String>,
    ) -> Expense {
        let expense = Expense {
            id: self.next_id("expense"),
            budget_id: budget_id.to_string(),
            description: description.to_string(),
            amount,
            category_id,
            payment_label,
        };
        self.expenses.lock().unwrap().push(expense.clone());
        expense
    }

    pub fn add_category(&self, user_id: &str, name: &str, supercategory: Supercategory) -> Category {
        let category = Category {
            id: self.next_id("category"),
            name: name.to_string(),
            supercategory,
            user_id: Some(user_id.to_string()),
        };
        self.categories.lock().unwrap().push(category.clone());
        category
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.lock().unwrap().len()
    }
}

fn unique(message: &str) -> Error {
    Error::Database(DatabaseError::UniqueViolation(message.to_string()))
}

#[async_trait]
impl UserRepositoryTrait for InMemoryDb {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.id == user_id)
            .map(|c| c.user.clone()))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user.email == email)
            .cloned())
    }

    async fn insert_new_user(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|c| c.user.email == new_user.email) {
            return Err(unique("users.email"));
        }
        let user = User {
            id: self.next_id("user"),
            email: new_user.email,
            created_at: NaiveDateTime::default(),
        };
        users.push(UserCredentials {
            user: user.clone(),
            password_hash: new_user.password_hash,
        });
        Ok(user)
    }
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryDb {
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut budgets: Vec<Budget> = self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        budgets.sort_by(|a, b| b.period_key().cmp(&a.period_key()));
        Ok(budgets)
    }

    fn get_by_id(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>> {
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == budget_id && b.user_id == user_id)
            .cloned())
    }

    async fn insert_new_budget(&self, user_id: String, new_budget: NewBudget) -> Result<Budget> {
        let exists = self.budgets.lock().unwrap().iter().any(|b| {
            b.user_id == user_id && b.month == new_budget.month && b.year == new_budget.year
        });
        if exists {
            return Err(unique("budgets.user_id, budgets.month, budgets.year"));
        }
        Ok(self.add_budget(&user_id, new_budget.month, new_budget.year, new_budget.income))
    }

    async fn update_income(
        &self,
        user_id: String,
        budget_id: String,
        income: f64,
    ) -> Result<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let budget = budgets
            .iter_mut()
            .find(|b| b.id == budget_id && b.user_id == user_id)
            .ok_or_else(|| Error::not_found("Budget not found."))?;
        budget.income = income;
        Ok(budget.clone())
    }

    async fn delete_budget(&self, user_id: String, budget_id: String) -> Result<usize> {
        let mut budgets = self.budgets.lock().unwrap();
        let before = budgets.len();
        budgets.retain(|b| !(b.id == budget_id && b.user_id == user_id));
        let deleted = before - budgets.len();
        if deleted > 0 {
            self.expenses
                .lock()
                .unwrap()
                .retain(|e| e.budget_id != budget_id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryDb {
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.budget_id == budget_id)
            .cloned()
            .collect())
    }

    fn list_by_budgets(&self, budget_ids: &[String]) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| budget_ids.contains(&e.budget_id))
            .cloned()
            .collect())
    }

    fn get_by_id(&self, expense_id: &str) -> Result<Option<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == expense_id)
            .cloned())
    }

    fn sum_by_budgets(&self, budget_ids: &[String]) -> Result<HashMap<String, f64>> {
        let mut sums = HashMap::new();
        for expense in self.expenses.lock().unwrap().iter() {
            if budget_ids.contains(&expense.budget_id) {
                *sums.entry(expense.budget_id.clone()).or_insert(0.0) += expense.amount;
            }
        }
        Ok(sums)
    }

    async fn insert_new_expense(
        &self,
        budget_id: String,
        new_expense: NewExpense,
    ) -> Result<Expense> {
        Ok(self.push_expense(
            &budget_id,
            &new_expense.description,
            new_expense.amount,
            new_expense.category_id,
            new_expense.payment_label,
        ))
    }

    async fn update_category(
        &self,
        expense_id: String,
        category_id: Option<String>,
    ) -> Result<Expense> {
        let mut expenses = self.expenses.lock().unwrap();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| Error::not_found("Expense not found."))?;
        expense.category_id = category_id;
        Ok(expense.clone())
    }

    async fn delete_expense(&self, expense_id: String) -> Result<usize> {
        let mut expenses = self.expenses.lock().unwrap();
        let before = expenses.len();
        expenses.retain(|e| e.id != expense_id);
        Ok(before - expenses.len())
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryDb {
    fn list_visible(&self, user_id: &str) -> Result<Vec<Category>> {
        let hidden = self.hidden.lock().unwrap();
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_global() || c.user_id.as_deref() == Some(user_id))
            .filter(|c| !hidden.contains(&(user_id.to_string(), c.id.clone())))
            .cloned()
            .collect())
    }

    fn list_resolvable(&self, user_id: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_global() || c.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    fn get_misc_category_id(&self) -> Result<Option<String>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.is_global_misc())
            .map(|c| c.id.clone()))
    }

    fn get_by_id(&self, category_id: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == category_id)
            .cloned())
    }

    async fn insert_new_category(
        &self,
        user_id: String,
        new_category: NewCategory,
    ) -> Result<Category> {
        Ok(self.add_category(&user_id, &new_category.name, new_category.supercategory))
    }

    async fn hide_category(&self, user_id: String, category_id: String) -> Result<()> {
        self.hidden.lock().unwrap().insert((user_id, category_id));
        Ok(())
    }

    async fn unhide_category(&self, user_id: String, category_id: String) -> Result<usize> {
        let removed = self.hidden.lock().unwrap().remove(&(user_id, category_id));
        Ok(usize::from(removed))
    }
}

#[async_trait]
impl PaymentSourceRepositoryTrait for InMemoryDb {
    fn list_by_user(&self, user_id: &str) -> Result<Vec<PaymentSource>> {
        let mut sources: Vec<PaymentSource> = self
            .payment_sources
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sources.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(sources)
    }

    async fn insert_new_payment_source(
        &self,
        user_id: String,
        new_source: NewPaymentSource,
    ) -> Result<PaymentSource> {
        let mut sources = self.payment_sources.lock().unwrap();
        if sources
            .iter()
            .any(|s| s.user_id == user_id && s.name == new_source.name)
        {
            return Err(unique("payment_sources.user_id, payment_sources.name"));
        }
        let source = PaymentSource {
            id: self.next_id("source"),
            user_id,
            name: new_source.name,
            color: new_source.color,
            created_at: NaiveDateTime::default(),
        };
        sources.push(source.clone());
        Ok(source)
    }

    async fn delete_payment_source(&self, user_id: String, source_id: String) -> Result<usize> {
        let mut sources = self.payment_sources.lock().unwrap();
        let before = sources.len();
        sources.retain(|s| !(s.id == source_id && s.user_id == user_id));
        Ok(before - sources.len())
    }
}

#[async_trait]
impl ImportRepositoryTrait for InMemoryDb {
    async fn insert_import(
        &self,
        user_id: String,
        filename: Option<String>,
        batches: Vec<ImportBatch>,
    ) -> Result<usize> {
        if *self.fail_imports.lock().unwrap() {
            return Err(Error::Database(DatabaseError::TransactionFailed(
                "import rolled back".to_string(),
            )));
        }
        let mut inserted = 0;
        for batch in batches {
            for record in &batch.expenses {
                self.push_expense(
                    &record.budget_id,
                    &record.description,
                    record.amount,
                    record.category_id.clone(),
                    record.payment_label.clone(),
                );
                inserted += 1;
            }
            let log = ImportLog {
                id: self.next_id("import"),
                user_id: user_id.clone(),
                budget_id: batch.budget_id.clone(),
                row_count: batch.expenses.len() as i32,
                filename: filename.clone(),
                created_at: NaiveDateTime::default(),
            };
            self.import_logs.lock().unwrap().push(log);
        }
        Ok(inserted)
    }

    fn list_import_logs(&self, user_id: &str) -> Result<Vec<ImportLog>> {
        Ok(self
            .import_logs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }
}
