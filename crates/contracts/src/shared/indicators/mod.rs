use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format a numeric KPI value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money,
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of a KPI card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Warning,
    Neutral,
}

/// Static metadata describing one summary card (label, format, icon).
#[derive(Debug, Clone)]
pub struct KpiCardMeta {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub format: ValueFormat,
}

// ---------------------------------------------------------------------------
// Summary card catalogue
// ---------------------------------------------------------------------------

/// The fixed card row rendered above the account tables. Values come from
/// `SummaryMetrics` wholesale; this catalogue only carries presentation
/// metadata keyed by card id.
pub static SUMMARY_CARDS: Lazy<Vec<KpiCardMeta>> = Lazy::new(|| {
    vec![
        KpiCardMeta {
            id: "total_sales_cy",
            label: "Total Sales",
            icon: "dollar-sign",
            format: ValueFormat::Money,
        },
        KpiCardMeta {
            id: "total_difference",
            label: "YoY Difference",
            icon: "trending-up",
            format: ValueFormat::Money,
        },
        KpiCardMeta {
            id: "increasing_count",
            label: "Growing Accounts",
            icon: "trending-up",
            format: ValueFormat::Integer,
        },
        KpiCardMeta {
            id: "declining_count",
            label: "Declining Accounts",
            icon: "trending-down",
            format: ValueFormat::Integer,
        },
        KpiCardMeta {
            id: "new_count",
            label: "New Accounts",
            icon: "user-plus",
            format: ValueFormat::Integer,
        },
        KpiCardMeta {
            id: "reactivated_count",
            label: "Reactivated",
            icon: "repeat",
            format: ValueFormat::Integer,
        },
        KpiCardMeta {
            id: "retention_rate_percent",
            label: "Retention Rate",
            icon: "customers",
            format: ValueFormat::Percent { decimals: 1 },
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_unique() {
        let mut ids: Vec<&str> = SUMMARY_CARDS.iter().map(|c| c.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
