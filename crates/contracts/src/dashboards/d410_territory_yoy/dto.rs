use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full dashboard payload produced by the upstream parsing pipeline.
///
/// Field names (including the display-oriented account keys) are fixed by
/// the provider and must be treated as a stable, versionless schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritorySnapshot {
    pub generated_at: NaiveDate,
    pub current_year: i32,
    pub previous_year: i32,
    pub summary: SummaryMetrics,
    pub declining_customers: Vec<AccountRecord>,
    pub increasing_customers: Vec<AccountRecord>,
    pub new_customers: Vec<AccountRecord>,
    pub reactivated_customers: Vec<AccountRecord>,
    pub frames: FrameTrends,
    pub brands: Vec<BrandRecord>,
    pub insights: Vec<String>,
}

impl TerritorySnapshot {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .context("territory snapshot payload does not match the provider schema")
    }

    /// All accounts across the four status buckets, tagged with the bucket
    /// they came from. Bucket order is preserved; identifiers are unique
    /// across buckets per the provider contract.
    pub fn all_accounts(&self) -> Vec<AccountWithStatus> {
        let buckets = [
            (AccountStatus::Declining, &self.declining_customers),
            (AccountStatus::Increasing, &self.increasing_customers),
            (AccountStatus::New, &self.new_customers),
            (AccountStatus::Reactivated, &self.reactivated_customers),
        ];
        let mut merged = Vec::with_capacity(buckets.iter().map(|(_, b)| b.len()).sum());
        for (status, bucket) in buckets {
            merged.extend(
                bucket
                    .iter()
                    .cloned()
                    .map(|account| AccountWithStatus { status, account }),
            );
        }
        merged
    }
}

/// Flat territory-wide aggregates. Provided wholesale by the pipeline and
/// never recomputed client-side beyond display formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_sales_cy: f64,
    pub total_sales_py: f64,
    pub total_difference: f64,
    pub sales_change_percent: f64,
    pub total_accounts: u32,
    pub increasing_count: u32,
    pub declining_count: u32,
    pub new_count: u32,
    pub reactivated_count: u32,
    pub retention_rate_percent: f64,
}

/// One purchasing account inside a status bucket.
///
/// Constructed once per snapshot load and immutable afterwards; the view
/// layer never mutates records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "Customer #")]
    pub customer_id: u32,
    #[serde(rename = "Customer Name")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "CY Total")]
    pub cy_total: f64,
    #[serde(rename = "PY Total")]
    pub py_total: f64,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "Frame Detail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_detail: Option<Vec<FrameDetailRow>>,
}

impl AccountRecord {
    /// Signed CY − PY difference. Derived, never carried in the payload,
    /// so `difference == cy_total - py_total` holds by construction.
    pub fn difference(&self) -> f64 {
        self.cy_total - self.py_total
    }
}

/// Account status bucket, used when the four bucket lists are merged into
/// one "all accounts" view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Increasing,
    Declining,
    New,
    Reactivated,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Increasing => "Growing",
            AccountStatus::Declining => "Declining",
            AccountStatus::New => "New",
            AccountStatus::Reactivated => "Reactivated",
        }
    }
}

/// An account joined with its status bucket for the merged view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWithStatus {
    pub status: AccountStatus,
    pub account: AccountRecord,
}

/// Per-account frame mix entry for the drill-down. Optional: accounts
/// without detail rows get a placeholder in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDetailRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "CY Units")]
    pub cy_units: i64,
    #[serde(rename = "PY Units")]
    pub py_units: i64,
}

impl FrameDetailRow {
    pub fn change(&self) -> i64 {
        self.cy_units - self.py_units
    }
}

/// Product brand performance across the territory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub brand: String,
    pub total_units: i64,
    pub account_count: u32,
}

impl BrandRecord {
    /// Average units per stocking account, `0.0` when no account carries
    /// the brand.
    pub fn avg_units_per_account(&self) -> f64 {
        if self.account_count == 0 {
            0.0
        } else {
            self.total_units as f64 / self.account_count as f64
        }
    }
}

/// Frame-category unit volume for the two comparison periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameCategoryRecord {
    pub category: String,
    pub cy_units: i64,
    pub py_units: i64,
}

impl FrameCategoryRecord {
    pub fn change(&self) -> i64 {
        self.cy_units - self.py_units
    }

    /// Percent unit change vs the previous period. A zero previous-period
    /// volume reports `0.0`, never a non-finite value.
    pub fn pct_change(&self) -> f64 {
        if self.py_units == 0 {
            0.0
        } else {
            self.change() as f64 / self.py_units as f64 * 100.0
        }
    }
}

/// Frame-category trend buckets as delivered by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameTrends {
    pub increasing: Vec<FrameCategoryRecord>,
    pub declining: Vec<FrameCategoryRecord>,
    pub top_growth: Vec<FrameCategoryRecord>,
    pub top_decline: Vec<FrameCategoryRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "generated_at": "2026-07-31",
        "current_year": 2026,
        "previous_year": 2025,
        "summary": {
            "total_sales_cy": 1250400.50,
            "total_sales_py": 1198200.25,
            "total_difference": 52200.25,
            "sales_change_percent": 4.36,
            "total_accounts": 135,
            "increasing_count": 58,
            "declining_count": 44,
            "new_count": 21,
            "reactivated_count": 12,
            "retention_rate_percent": 84.4
        },
        "declining_customers": [
            {
                "Customer #": 10417,
                "Customer Name": "NEVADA EYE PHYSICIANS",
                "City": "HENDERSON",
                "CY Total": 18200.10,
                "PY Total": 24754.84,
                "Category": "Medical"
            }
        ],
        "increasing_customers": [
            {
                "Customer #": 10021,
                "Customer Name": "SUNDANCE OPTICAL",
                "City": "ST GEORGE",
                "CY Total": 61244.90,
                "PY Total": 46333.41,
                "Frame Detail": [
                    { "Category": "Crystal", "CY Units": 120, "PY Units": 85 }
                ]
            }
        ],
        "new_customers": [],
        "reactivated_customers": [
            {
                "Customer #": 10930,
                "Customer Name": "DESERT VISION CENTER",
                "City": "MESQUITE",
                "CY Total": 9310.00,
                "PY Total": 0.0
            }
        ],
        "frames": {
            "increasing": [
                { "category": "Crystal", "cy_units": 540, "py_units": 402 }
            ],
            "declining": [
                { "category": "Tortoise", "cy_units": 222, "py_units": 310 }
            ],
            "top_growth": [],
            "top_decline": []
        },
        "brands": [
            { "brand": "Artisan", "total_units": 1440, "account_count": 48 }
        ],
        "insights": [
            "Territory sales grew 4.4% year over year."
        ]
    }"#;

    #[test]
    fn fixture_round_trips() {
        let snapshot = TerritorySnapshot::from_json(FIXTURE).unwrap();
        let reencoded = serde_json::to_string(&snapshot).unwrap();
        let reparsed = TerritorySnapshot::from_json(&reencoded).unwrap();
        assert_eq!(snapshot, reparsed);
    }

    #[test]
    fn display_oriented_keys_are_honoured() {
        let snapshot = TerritorySnapshot::from_json(FIXTURE).unwrap();
        let account = &snapshot.increasing_customers[0];
        assert_eq!(account.customer_id, 10021);
        assert_eq!(account.name, "SUNDANCE OPTICAL");
        assert_eq!(account.city, "ST GEORGE");
        assert_eq!(account.frame_detail.as_ref().unwrap()[0].category, "Crystal");

        let reencoded = serde_json::to_value(account).unwrap();
        assert!(reencoded.get("Customer #").is_some());
        assert!(reencoded.get("CY Total").is_some());
        // Absent optional fields stay absent instead of serialising null.
        assert!(reencoded.get("Category").is_none());
    }

    #[test]
    fn difference_is_derived_not_stored() {
        let snapshot = TerritorySnapshot::from_json(FIXTURE).unwrap();
        let declining = &snapshot.declining_customers[0];
        assert!((declining.difference() - (18200.10 - 24754.84)).abs() < 1e-9);

        let growing = &snapshot.increasing_customers[0];
        assert!(growing.difference() > 0.0);
    }

    #[test]
    fn zero_previous_period_reports_zero_percent() {
        let record = FrameCategoryRecord {
            category: "Matte".to_string(),
            cy_units: 75,
            py_units: 0,
        };
        assert_eq!(record.pct_change(), 0.0);
        assert!(record.pct_change().is_finite());
    }

    #[test]
    fn brand_average_guards_zero_accounts() {
        let brand = BrandRecord {
            brand: "Orphaned".to_string(),
            total_units: 10,
            account_count: 0,
        };
        assert_eq!(brand.avg_units_per_account(), 0.0);

        let stocked = BrandRecord {
            brand: "Artisan".to_string(),
            total_units: 1440,
            account_count: 48,
        };
        assert!((stocked.avg_units_per_account() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn all_accounts_preserves_bucket_order_and_tags() {
        let snapshot = TerritorySnapshot::from_json(FIXTURE).unwrap();
        let merged = snapshot.all_accounts();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].status, AccountStatus::Declining);
        assert_eq!(merged[1].status, AccountStatus::Increasing);
        assert_eq!(merged[2].status, AccountStatus::Reactivated);
        assert_eq!(merged[2].account.name, "DESERT VISION CENTER");
    }
}
