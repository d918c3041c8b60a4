#[cfg(test)]
mod tests {
    use crate::imports::{ColumnMapping, ImportRow, ImportService, ImportServiceTrait, RowIssue};
    use crate::testing::{InMemoryDb, OTHER_USER, USER};
    use std::sync::Arc;

    const STATEMENT: &str = "Amount,Description,Month,Year\r\n\
        12.50,Trader Joe's,Mar,2025\r\n\
        \"$1,200.00\",Monthly rent,mar,2025\r\n\
        abc,Coffee,Mar,2025\r\n\
        5,,Mar,2025\r\n\
        9,Netflix,Apr,2025\r\n\
        7,Random thing,Xyz,2025\r\n";

    fn service(db: &Arc<InMemoryDb>) -> ImportService {
        ImportService::new(db.clone(), db.clone(), db.clone())
    }

    fn mapping() -> ColumnMapping {
        ColumnMapping {
            amount_column: 0,
            description_column: 1,
            month_column: 2,
            year_column: Some(3),
            default_year: None,
        }
    }

    fn row(description: &str, amount: f64, month: i32, year: i32) -> ImportRow {
        ImportRow {
            description: description.to_string(),
            amount,
            month,
            year,
            category_id: None,
        }
    }

    #[test]
    fn test_parse_csv_exposes_headers() {
        let db = Arc::new(InMemoryDb::new());
        let parsed = service(&db).parse_csv(STATEMENT.as_bytes()).unwrap();
        assert_eq!(parsed.headers, vec!["Amount", "Description", "Month", "Year"]);
        assert_eq!(parsed.rows.len(), 6);
        assert_eq!(parsed.rows[1][0], "$1,200.00");
    }

    #[test]
    fn test_preview_flags_each_row() {
        let db = Arc::new(InMemoryDb::new());
        let march = db.add_budget(USER, 3, 2025, 4000.0);
        let preview = service(&db)
            .preview_import(USER, STATEMENT.as_bytes(), &mapping())
            .unwrap();

        assert_eq!(preview.rows.len(), 6);
        assert_eq!(preview.importable_count, 2);
        assert_eq!(preview.skipped_count, 4);
        assert_eq!(preview.skipped_no_budget, 1);

        let groceries = &preview.rows[0];
        assert_eq!(groceries.amount, Some(12.5));
        assert_eq!(groceries.budget_id.as_deref(), Some(march.id.as_str()));
        assert_eq!(groceries.category_name, "Groceries");
        assert_eq!(groceries.category_id.as_deref(), Some("cat-groceries"));

        let rent = &preview.rows[1];
        assert_eq!(rent.amount, Some(1200.0));
        assert_eq!(rent.category_name, "Rent");

        let errors: Vec<Option<&str>> = preview.rows.iter().map(|r| r.error.as_deref()).collect();
        assert_eq!(
            errors,
            vec![
                None,
                None,
                Some(RowIssue::InvalidAmount.message()),
                Some(RowIssue::MissingDescription.message()),
                Some(RowIssue::NoBudget.message()),
                Some(RowIssue::InvalidMonth.message()),
            ]
        );
    }

    #[test]
    fn test_preview_ignores_other_users_budgets() {
        let db = Arc::new(InMemoryDb::new());
        db.add_budget(OTHER_USER, 3, 2025, 4000.0);
        let preview = service(&db)
            .preview_import(USER, STATEMENT.as_bytes(), &mapping())
            .unwrap();
        assert_eq!(preview.importable_count, 0);
        assert_eq!(preview.skipped_no_budget, 3);
    }

    #[tokio::test]
    async fn test_import_groups_rows_by_budget_and_logs() {
        let db = Arc::new(InMemoryDb::new());
        let march = db.add_budget(USER, 3, 2025, 4000.0);
        let april = db.add_budget(USER, 4, 2025, 4000.0);
        let service = service(&db);

        let mut rows = service
            .preview_import(USER, STATEMENT.as_bytes(), &mapping())
            .unwrap()
            .import_rows();
        rows.push(row("Cinema", 20.0, 4, 2025));
        rows.push(row("Flight", 300.0, 9, 2025));

        let result = service
            .import_expenses(USER, rows, Some("  march.csv ".into()))
            .await
            .unwrap();
        assert_eq!(result.imported, 3);
        assert_eq!(result.skipped_no_budget, 1);
        assert_eq!(result.skipped_invalid, 0);
        assert_eq!(
            result.message,
            "Imported 3 expense(s). 1 row(s) skipped (no budget for that month)."
        );

        let logs = service.get_import_history(USER).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].budget_id, april.id);
        assert_eq!(logs[0].row_count, 1);
        assert_eq!(logs[1].budget_id, march.id);
        assert_eq!(logs[1].row_count, 2);
        assert_eq!(logs[1].filename.as_deref(), Some("march.csv"));
        assert!(service.get_import_history(OTHER_USER).unwrap().is_empty());

        let cinema = db
            .expenses
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.description == "Cinema")
            .cloned()
            .unwrap();
        assert_eq!(cinema.category_id.as_deref(), Some("cat-misc"));
    }

    #[tokio::test]
    async fn test_import_replaces_invisible_category_with_misc() {
        let db = Arc::new(InMemoryDb::new());
        let budget = db.add_budget(USER, 1, 2026, 100.0);
        let mut foreign = row("Boat fuel", 80.0, 1, 2026);
        foreign.category_id = Some("not-a-category".into());

        service(&db)
            .import_expenses(USER, vec![foreign], None)
            .await
            .unwrap();
        let stored = db.expenses.lock().unwrap()[0].clone();
        assert_eq!(stored.budget_id, budget.id);
        assert_eq!(stored.category_id.as_deref(), Some("cat-misc"));
    }

    #[tokio::test]
    async fn test_import_counts_invalid_and_missing_budget_rows() {
        let db = Arc::new(InMemoryDb::new());
        let service = service(&db);

        let err = service
            .import_expenses(USER, vec![row(" ", 1.0, 1, 2025), row("x", -2.0, 1, 2025)], None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No valid rows to import.");

        let result = service
            .import_expenses(USER, vec![row("Taxi", 12.0, 2, 2025), row("", 1.0, 2, 2025)], None)
            .await
            .unwrap();
        assert_eq!(result.imported, 0);
        assert_eq!(result.skipped_no_budget, 1);
        assert_eq!(result.skipped_invalid, 1);
        assert_eq!(db.expense_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_import_writes_nothing() {
        let db = Arc::new(InMemoryDb::new());
        db.add_budget(USER, 2, 2025, 100.0);
        *db.fail_imports.lock().unwrap() = true;

        let result = service(&db)
            .import_expenses(USER, vec![row("Taxi", 12.0, 2, 2025)], None)
            .await;
        assert!(result.is_err());
        assert_eq!(db.expense_count(), 0);
        assert!(db.import_logs.lock().unwrap().is_empty());
    }
}
