use crate::shared::components::stat_card::StatCard;
use crate::shared::number_format::format_currency;
use contracts::dashboards::d410_territory_yoy::SummaryMetrics;
use contracts::shared::indicators::{IndicatorStatus, KpiCardMeta, SUMMARY_CARDS};
use leptos::prelude::*;

/// Map one catalogue card to its value, change and status. All numbers
/// come straight from the provider's summary; only the status colouring
/// is decided here.
fn card_value(
    meta: &KpiCardMeta,
    summary: &SummaryMetrics,
) -> (Option<f64>, Option<f64>, IndicatorStatus, Option<String>) {
    match meta.id {
        "total_sales_cy" => (
            Some(summary.total_sales_cy),
            Some(summary.sales_change_percent),
            if summary.sales_change_percent >= 0.0 {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            },
            Some(format!(
                "vs {} last year",
                format_currency(summary.total_sales_py)
            )),
        ),
        "total_difference" => (
            Some(summary.total_difference),
            None,
            if summary.total_difference >= 0.0 {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            },
            None,
        ),
        "increasing_count" => (
            Some(f64::from(summary.increasing_count)),
            None,
            IndicatorStatus::Good,
            None,
        ),
        "declining_count" => (
            Some(f64::from(summary.declining_count)),
            None,
            if summary.declining_count > 0 {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            },
            None,
        ),
        "new_count" => (
            Some(f64::from(summary.new_count)),
            None,
            IndicatorStatus::Good,
            None,
        ),
        "reactivated_count" => (
            Some(f64::from(summary.reactivated_count)),
            None,
            IndicatorStatus::Good,
            None,
        ),
        "retention_rate_percent" => (
            Some(summary.retention_rate_percent),
            None,
            if summary.retention_rate_percent >= 80.0 {
                IndicatorStatus::Good
            } else if summary.retention_rate_percent >= 60.0 {
                IndicatorStatus::Warning
            } else {
                IndicatorStatus::Bad
            },
            Some(format!("{} accounts", summary.total_accounts)),
        ),
        _ => (None, None, IndicatorStatus::Neutral, None),
    }
}

/// KPI card row above the account tables.
#[component]
pub fn SummaryCards(summary: SummaryMetrics) -> impl IntoView {
    view! {
        <div class="stat-card-grid">
            {SUMMARY_CARDS
                .iter()
                .map(|meta| {
                    let (value, change_percent, status, subtitle) = card_value(meta, &summary);
                    view! {
                        <StatCard
                            label=meta.label.to_string()
                            icon_name=meta.icon.to_string()
                            value=value
                            format=meta.format.clone()
                            status=status
                            change_percent=change_percent
                            subtitle=subtitle
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SummaryMetrics {
        SummaryMetrics {
            total_sales_cy: 1_250_400.50,
            total_sales_py: 1_198_200.25,
            total_difference: 52_200.25,
            sales_change_percent: 4.36,
            total_accounts: 135,
            increasing_count: 58,
            declining_count: 44,
            new_count: 21,
            reactivated_count: 12,
            retention_rate_percent: 84.4,
        }
    }

    #[test]
    fn every_catalogue_card_resolves_a_value() {
        let summary = summary();
        for meta in SUMMARY_CARDS.iter() {
            let (value, _, _, _) = card_value(meta, &summary);
            assert!(value.is_some(), "card {} resolved no value", meta.id);
        }
    }

    #[test]
    fn statuses_follow_the_summary_signs() {
        let mut s = summary();
        let sales = SUMMARY_CARDS.iter().find(|m| m.id == "total_sales_cy").unwrap();
        let (_, _, status, _) = card_value(sales, &s);
        assert_eq!(status, IndicatorStatus::Good);

        s.sales_change_percent = -3.1;
        let (_, _, status, _) = card_value(sales, &s);
        assert_eq!(status, IndicatorStatus::Bad);

        s.retention_rate_percent = 55.0;
        let retention = SUMMARY_CARDS
            .iter()
            .find(|m| m.id == "retention_rate_percent")
            .unwrap();
        let (_, _, status, _) = card_value(retention, &s);
        assert_eq!(status, IndicatorStatus::Bad);
    }
}
