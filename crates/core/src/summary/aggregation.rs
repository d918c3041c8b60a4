use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::categories::{Category, Supercategory};
use crate::constants::MISC_CATEGORY_NAME;
use crate::expenses::Expense;

pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Spending per supercategory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupercategoryTotals {
    pub needs: f64,
    pub wants: f64,
    pub misc: f64,
}

impl SupercategoryTotals {
    pub fn get(&self, supercategory: Supercategory) -> f64 {
        match supercategory {
            Supercategory::Needs => self.needs,
            Supercategory::Wants => self.wants,
            Supercategory::Misc => self.misc,
        }
    }

    fn add(&mut self, supercategory: Supercategory, amount: f64) {
        match supercategory {
            Supercategory::Needs => self.needs += amount,
            Supercategory::Wants => self.wants += amount,
            Supercategory::Misc => self.misc += amount,
        }
    }

    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.misc
    }
}

/// Spending for one category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category_name: String,
    pub supercategory: Supercategory,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedsWantsSplit {
    pub needs_amount: f64,
    pub wants_amount: f64,
    pub needs_percent: f64,
    pub wants_percent: f64,
}

/// Resolves an expense's category; uncategorized and unknown ids map to Misc.
fn resolve<'a>(
    expense: &Expense,
    by_id: &HashMap<&str, &'a Category>,
) -> (&'a str, Supercategory) {
    expense
        .category_id
        .as_deref()
        .and_then(|id| by_id.get(id).copied())
        .map(|c| (c.name.as_str(), c.supercategory))
        .unwrap_or((MISC_CATEGORY_NAME, Supercategory::Misc))
}

fn index_categories(categories: &[Category]) -> HashMap<&str, &Category> {
    categories.iter().map(|c| (c.id.as_str(), c)).collect()
}

pub fn group_by_supercategory(
    expenses: &[Expense],
    categories: &[Category],
) -> SupercategoryTotals {
    let by_id = index_categories(categories);
    let mut totals = SupercategoryTotals::default();
    for expense in expenses {
        let (_, supercategory) = resolve(expense, &by_id);
        totals.add(supercategory, expense.amount);
    }
    totals
}

/// Totals per category, largest first (ties by name).
pub fn group_by_category(expenses: &[Expense], categories: &[Category]) -> Vec<CategoryTotal> {
    let by_id = index_categories(categories);
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for expense in expenses {
        let (name, supercategory) = resolve(expense, &by_id);
        match positions.get(name) {
            Some(&i) => totals[i].amount += expense.amount,
            None => {
                positions.insert(name, totals.len());
                totals.push(CategoryTotal {
                    category_name: name.to_string(),
                    supercategory,
                    amount: expense.amount,
                });
            }
        }
    }
    totals.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });
    totals
}

/// Needs and wants as shares of their combined spending.
pub fn needs_wants_split(totals: &SupercategoryTotals) -> NeedsWantsSplit {
    let combined = totals.needs + totals.wants;
    let (needs_percent, wants_percent) = if combined > 0.0 {
        (
            totals.needs / combined * 100.0,
            totals.wants / combined * 100.0,
        )
    } else {
        (0.0, 0.0)
    };
    NeedsWantsSplit {
        needs_amount: totals.needs,
        wants_amount: totals.wants,
        needs_percent,
        wants_percent,
    }
}
