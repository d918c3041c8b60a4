//! Dashboard module - read-only view models built from budgets and expenses.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod month_grid;


pub use dashboard_model::{BudgetDetailView, DashboardView, MonthCell, YearMonthGrid};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
pub use month_grid::{build_month_grid, select_budget, year_range};
