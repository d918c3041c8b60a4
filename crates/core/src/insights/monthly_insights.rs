use std::collections::HashMap;

use super::insights_model::{Insight, MonthSnapshot};
use crate::constants::MISC_CATEGORY_NAME;
use crate::utils::format_currency;

const MAX_CATEGORY_COMPARISONS: usize = 5;
const MAX_AMOUNT_CALLOUTS: usize = 2;

/// Month-over-month observations. Empty when there is no previous month.
pub fn generate_monthly_insights(
    current: &MonthSnapshot,
    previous: Option<&MonthSnapshot>,
) -> Vec<Insight> {
    let Some(previous) = previous else {
        return Vec::new();
    };
    let mut insights = Vec::new();

    if previous.spent > 0.0 {
        let pct_change = (current.spent - previous.spent) / previous.spent * 100.0;
        if pct_change.abs() < 1.0 {
            insights.push(Insight::info("You spent about the same as last month."));
        } else if pct_change > 0.0 {
            insights.push(Insight::highlight(format!(
                "You spent {}% more than last month.",
                pct_change.round()
            )));
        } else {
            insights.push(Insight::highlight(format!(
                "You spent {}% less than last month.",
                (-pct_change).round()
            )));
        }
    } else if current.spent > 0.0 {
        insights.push(Insight::info(
            "You had spending this month (last month had none).",
        ));
    }

    if let Some(largest) = current.by_category.first() {
        insights.push(Insight::info(format!(
            "Your largest expense category was {}.",
            largest.category_name
        )));
    }

    let previous_by_name: HashMap<&str, f64> = previous
        .by_category
        .iter()
        .map(|c| (c.category_name.as_str(), c.amount))
        .collect();
    for row in current.by_category.iter().take(MAX_CATEGORY_COMPARISONS) {
        let Some(&prev_amount) = previous_by_name.get(row.category_name.as_str()) else {
            continue;
        };
        if prev_amount <= 0.0 || row.amount <= 0.0 {
            continue;
        }
        let pct_change = (row.amount - prev_amount) / prev_amount * 100.0;
        if pct_change.abs() < 1.0 {
            continue;
        }
        let direction = if pct_change > 0.0 { "more" } else { "less" };
        insights.push(Insight::info(format!(
            "You spent {}% {} on {} than last month.",
            pct_change.abs().round(),
            direction,
            row.category_name
        )));
    }

    for row in current
        .by_category
        .iter()
        .filter(|c| c.category_name != MISC_CATEGORY_NAME && c.amount > 0.0)
        .take(MAX_AMOUNT_CALLOUTS)
    {
        insights.push(Insight::info(format!(
            "You spent {} on {} this month.",
            format_currency(row.amount),
            row.category_name
        )));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Supercategory;
    use crate::insights::InsightKind;
    use crate::summary::CategoryTotal;

    fn snapshot(spent: f64, categories: &[(&str, f64)]) -> MonthSnapshot {
        MonthSnapshot {
            income: 5000.0,
            spent,
            by_category: categories
                .iter()
                .map(|(name, amount)| CategoryTotal {
                    category_name: name.to_string(),
                    supercategory: Supercategory::Needs,
                    amount: *amount,
                })
                .collect(),
            ..Default::default()
        }
    }

    fn texts(insights: &[Insight]) -> Vec<&str> {
        insights.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_no_previous_month_yields_nothing() {
        let current = snapshot(100.0, &[("Rent", 100.0)]);
        assert!(generate_monthly_insights(&current, None).is_empty());
    }

    #[test]
    fn test_total_change_and_category_comparisons() {
        let current = snapshot(1500.0, &[("Rent", 1000.0), ("Groceries", 300.0), ("Misc", 200.0)]);
        let previous = snapshot(1000.0, &[("Rent", 1000.0), ("Groceries", 200.0), ("Misc", 100.0)]);
        let insights = generate_monthly_insights(&current, Some(&previous));
        assert_eq!(
            texts(&insights),
            vec![
                "You spent 50% more than last month.",
                "Your largest expense category was Rent.",
                "You spent 50% more on Groceries than last month.",
                "You spent 100% more on Misc than last month.",
                "You spent $1,000.00 on Rent this month.",
                "You spent $300.00 on Groceries this month.",
            ]
        );
        assert_eq!(insights[0].kind, InsightKind::Highlight);
        assert!(insights[1..].iter().all(|i| i.kind == InsightKind::Info));
    }

    #[test]
    fn test_spending_decrease_is_rounded() {
        let current = snapshot(666.0, &[]);
        let previous = snapshot(1000.0, &[]);
        let insights = generate_monthly_insights(&current, Some(&previous));
        assert_eq!(texts(&insights), vec!["You spent 33% less than last month."]);
    }

    #[test]
    fn test_about_the_same() {
        let current = snapshot(1005.0, &[]);
        let previous = snapshot(1000.0, &[]);
        let insights = generate_monthly_insights(&current, Some(&previous));
        assert_eq!(texts(&insights), vec!["You spent about the same as last month."]);
        assert_eq!(insights[0].kind, InsightKind::Info);
    }

    #[test]
    fn test_previous_month_without_spending() {
        let current = snapshot(50.0, &[("Misc", 50.0)]);
        let previous = snapshot(0.0, &[]);
        let insights = generate_monthly_insights(&current, Some(&previous));
        assert_eq!(
            texts(&insights),
            vec![
                "You had spending this month (last month had none).",
                "Your largest expense category was Misc.",
            ]
        );
    }

    #[test]
    fn test_only_top_five_categories_are_compared() {
        let names = ["A", "B", "C", "D", "E", "F"];
        let current_rows: Vec<(&str, f64)> =
            names.iter().enumerate().map(|(i, n)| (*n, 200.0 - i as f64)).collect();
        let previous_rows: Vec<(&str, f64)> = names.iter().map(|n| (*n, 100.0)).collect();
        let insights = generate_monthly_insights(
            &snapshot(1000.0, &current_rows),
            Some(&snapshot(600.0, &previous_rows)),
        );
        let comparisons = insights
            .iter()
            .filter(|i| i.text.ends_with("than last month.") && i.text.contains(" on "))
            .count();
        assert_eq!(comparisons, 5);
    }

    #[test]
    fn test_insight_serializes_kind_as_type() {
        let json = serde_json::to_value(Insight::highlight("x")).unwrap();
        assert_eq!(json["type"], "highlight");
        assert_eq!(json["text"], "x");
    }
}
