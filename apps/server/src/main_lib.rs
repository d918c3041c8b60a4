use std::sync::Arc;

use crate::{
    auth::{decode_secret_key, AuthConfig, AuthManager},
    config::Config,
};
use guap_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    imports::{ImportService, ImportServiceTrait},
    payment_sources::{PaymentSourceService, PaymentSourceServiceTrait},
    users::{UserService, UserServiceTrait},
};
use guap_storage_sqlite::{
    budgets::BudgetRepository,
    categories::CategoryRepository,
    db::{self, write_actor},
    expenses::ExpenseRepository,
    imports::ImportRepository,
    payment_sources::PaymentSourceRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub payment_source_service: Arc<dyn PaymentSourceServiceTrait + Send + Sync>,
    pub import_service: Arc<dyn ImportServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GUAP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let jwt_secret = decode_secret_key(&config.secret_key)?;
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let payment_source_repository =
        Arc::new(PaymentSourceRepository::new(pool.clone(), writer.clone()));
    let import_repository = Arc::new(ImportRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(user_repository));
    let budget_service = Arc::new(BudgetService::new(
        budget_repository.clone(),
        expense_repository.clone(),
    ));
    let expense_service = Arc::new(ExpenseService::new(
        expense_repository.clone(),
        budget_repository.clone(),
        category_repository.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(category_repository.clone()));
    let payment_source_service =
        Arc::new(PaymentSourceService::new(payment_source_repository.clone()));
    let import_service = Arc::new(ImportService::new(
        import_repository,
        budget_repository,
        category_repository,
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        budget_service.clone(),
        category_service.clone(),
        expense_repository,
        payment_source_repository,
    ));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret,
        access_token_ttl: config.access_token_ttl,
    }));

    Ok(Arc::new(AppState {
        user_service,
        budget_service,
        expense_service,
        category_service,
        payment_source_service,
        import_service,
        dashboard_service,
        auth,
    }))
}
