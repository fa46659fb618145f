//! Financial report shapes and the monthly trend merge.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::DbId;

/// Leads created within this many days count as new in the overview.
pub const NEW_LEAD_WINDOW_DAYS: i64 = 30;

/// Name reported for revenue whose client row cannot be resolved.
pub const UNKNOWN_CLIENT_NAME: &str = "Unknown Client";

/// Headline financial metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueOverview {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub unpaid_amount: f64,
    pub overdue_amount: f64,
    pub new_leads_last_30_days: i64,
}

impl RevenueOverview {
    pub fn new(
        total_revenue: f64,
        total_expenses: f64,
        unpaid_amount: f64,
        overdue_amount: f64,
        new_leads_last_30_days: i64,
    ) -> Self {
        Self {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            unpaid_amount,
            overdue_amount,
            new_leads_last_30_days,
        }
    }
}

/// Revenue and expenses for one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
}

/// Paid invoice total for one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRevenue {
    pub client_id: DbId,
    pub client_name: String,
    pub total_revenue: f64,
}

/// Merge per-month revenue and expense totals into one ascending series.
///
/// Inputs are `(month, total)` pairs keyed by `YYYY-MM`. A month present on
/// only one side reports 0 for the other. Duplicate keys on the same side
/// are summed.
pub fn merge_monthly_trends(
    revenue: &[(String, f64)],
    expenses: &[(String, f64)],
) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for (month, amount) in revenue {
        months.entry(month.as_str()).or_default().0 += amount;
    }
    for (month, amount) in expenses {
        months.entry(month.as_str()).or_default().1 += amount;
    }

    months
        .into_iter()
        .map(|(month, (revenue, expenses))| MonthlyTrend {
            month: month.to_string(),
            revenue,
            expenses,
        })
        .collect()
}

/// Sort client revenue rows by total, largest first.
pub fn rank_clients(mut rows: Vec<ClientRevenue>) -> Vec<ClientRevenue> {
    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, f64)]) -> Vec<(String, f64)> {
        items.iter().map(|(m, v)| (m.to_string(), *v)).collect()
    }

    #[test]
    fn net_profit_is_revenue_minus_expenses() {
        let o = RevenueOverview::new(5000.0, 1200.0, 300.0, 150.0, 4);
        assert_eq!(o.net_profit, 3800.0);
    }

    #[test]
    fn trends_merge_both_sides_in_month_order() {
        let revenue = pairs(&[("2024-03", 1200.0), ("2024-01", 500.0)]);
        let expenses = pairs(&[("2024-02", 80.0), ("2024-03", 20.0)]);

        let trends = merge_monthly_trends(&revenue, &expenses);
        let months: Vec<_> = trends.iter().map(|t| t.month.as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);

        assert_eq!(trends[0].revenue, 500.0);
        assert_eq!(trends[0].expenses, 0.0);
        assert_eq!(trends[1].revenue, 0.0);
        assert_eq!(trends[1].expenses, 80.0);
        assert_eq!(trends[2].revenue, 1200.0);
        assert_eq!(trends[2].expenses, 20.0);
    }

    #[test]
    fn trends_order_across_years() {
        let revenue = pairs(&[("2025-01", 1.0), ("2024-12", 2.0)]);
        let trends = merge_monthly_trends(&revenue, &[]);
        assert_eq!(trends[0].month, "2024-12");
        assert_eq!(trends[1].month, "2025-01");
    }

    #[test]
    fn empty_inputs_give_empty_series() {
        assert!(merge_monthly_trends(&[], &[]).is_empty());
    }

    #[test]
    fn clients_ranked_by_total_desc() {
        let rows = vec![
            ClientRevenue { client_id: 1, client_name: "A".into(), total_revenue: 100.0 },
            ClientRevenue { client_id: 2, client_name: "B".into(), total_revenue: 900.0 },
        ];
        let ranked = rank_clients(rows);
        assert_eq!(ranked[0].client_id, 2);
    }
}
