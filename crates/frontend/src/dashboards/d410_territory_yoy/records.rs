//! List-transform row contracts for the dashboard's record types.

use crate::shared::list_view::{cmp_f64, cmp_text, ListRecord};
use contracts::dashboards::d410_territory_yoy::{AccountRecord, AccountWithStatus, BrandRecord};
use std::cmp::Ordering;

impl ListRecord for AccountRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer_id" => self.customer_id.cmp(&other.customer_id),
            "city" => cmp_text(&self.city, &other.city),
            "cy_total" => cmp_f64(self.cy_total, other.cy_total),
            "py_total" => cmp_f64(self.py_total, other.py_total),
            "difference" => cmp_f64(self.difference(), other.difference()),
            // Record sets are homogeneous, so an unknown field name can
            // only come from a typo in a header; fall back to name order.
            _ => cmp_text(&self.name, &other.name),
        }
    }

    fn matches_search(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.city.to_lowercase().contains(needle_lower)
    }

    fn city(&self) -> Option<&str> {
        Some(&self.city)
    }
}

impl ListRecord for AccountWithStatus {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "status" => cmp_text(self.status.label(), other.status.label()),
            _ => self.account.compare_by_field(&other.account, field),
        }
    }

    fn matches_search(&self, needle_lower: &str) -> bool {
        self.account.matches_search(needle_lower)
    }

    fn city(&self) -> Option<&str> {
        self.account.city()
    }
}

impl ListRecord for BrandRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "total_units" => self.total_units.cmp(&other.total_units),
            "account_count" => self.account_count.cmp(&other.account_count),
            "avg_units" => cmp_f64(self.avg_units_per_account(), other.avg_units_per_account()),
            _ => cmp_text(&self.brand, &other.brand),
        }
    }

    fn matches_search(&self, needle_lower: &str) -> bool {
        self.brand.to_lowercase().contains(needle_lower)
    }

    /// Brands have no geography; the city filter never applies to them.
    fn city(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{apply_view, TableFlavor, ViewState};

    fn account(id: u32, name: &str, city: &str, cy_total: f64, py_total: f64) -> AccountRecord {
        AccountRecord {
            customer_id: id,
            name: name.to_string(),
            city: city.to_string(),
            cy_total,
            py_total,
            category: None,
            frame_detail: None,
        }
    }

    #[test]
    fn declining_table_default_puts_biggest_losses_first() {
        // Differences: -4994.98, -6554.74, -4337.59 in input order.
        let records = vec![
            account(1, "MOAB EYECARE", "MOAB", 10005.02, 15000.00),
            account(2, "NEVADA EYE PHYSICIANS", "HENDERSON", 18200.10, 24754.84),
            account(3, "RED ROCK OPTICS", "KANAB", 20662.41, 25000.00),
        ];

        let state = ViewState::new("difference", TableFlavor::Declining);
        assert!(state.sort_ascending);

        let outcome = apply_view(&records, &state);
        let diffs: Vec<f64> = outcome.rows.iter().map(|r| r.difference()).collect();
        assert!((diffs[0] - (-6554.74)).abs() < 1e-9);
        assert!((diffs[1] - (-4994.98)).abs() < 1e-9);
        assert!((diffs[2] - (-4337.59)).abs() < 1e-9);
    }

    #[test]
    fn growing_table_default_puts_biggest_gains_first() {
        // Differences: 12222.22, 14911.49, 10753.09 in input order.
        let records = vec![
            account(1, "ZION FAMILY OPTICAL", "ST GEORGE", 22222.22, 10000.00),
            account(2, "SUNDANCE OPTICAL", "ST GEORGE", 24911.49, 10000.00),
            account(3, "DESERT VISION CENTER", "MESQUITE", 20753.09, 10000.00),
        ];

        let state = ViewState::new("difference", TableFlavor::Standard);
        assert!(!state.sort_ascending);

        let outcome = apply_view(&records, &state);
        let diffs: Vec<f64> = outcome.rows.iter().map(|r| r.difference()).collect();
        assert!((diffs[0] - 14911.49).abs() < 1e-9);
        assert!((diffs[1] - 12222.22).abs() < 1e-9);
        assert!((diffs[2] - 10753.09).abs() < 1e-9);
    }

    #[test]
    fn account_search_covers_name_and_city() {
        let records = vec![
            account(1, "SUNDANCE OPTICAL", "ST GEORGE", 1.0, 1.0),
            account(2, "NEVADA EYE PHYSICIANS", "HENDERSON", 1.0, 1.0),
        ];
        let mut state = ViewState::new("difference", TableFlavor::Standard);
        state.set_search("optical".to_string());

        let outcome = apply_view(&records, &state);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].name, "SUNDANCE OPTICAL");

        state.set_search("henderson".to_string());
        let by_city = apply_view(&records, &state);
        assert_eq!(by_city.rows.len(), 1);
        assert_eq!(by_city.rows[0].name, "NEVADA EYE PHYSICIANS");
    }

    #[test]
    fn tagged_accounts_sort_by_status_label() {
        use contracts::dashboards::d410_territory_yoy::AccountStatus;

        let rows = vec![
            AccountWithStatus {
                status: AccountStatus::Reactivated,
                account: account(1, "A", "X", 1.0, 1.0),
            },
            AccountWithStatus {
                status: AccountStatus::Declining,
                account: account(2, "B", "X", 1.0, 1.0),
            },
        ];
        let mut state = ViewState::new("status", TableFlavor::Standard);
        state.sort_ascending = true;

        let outcome = apply_view(&rows, &state);
        assert_eq!(outcome.rows[0].status, AccountStatus::Declining);
        assert_eq!(outcome.rows[1].status, AccountStatus::Reactivated);
    }

    #[test]
    fn brands_sort_by_average_and_ignore_city_filter() {
        let brands = vec![
            BrandRecord {
                brand: "Artisan".to_string(),
                total_units: 1440,
                account_count: 48,
            },
            BrandRecord {
                brand: "Meridian".to_string(),
                total_units: 900,
                account_count: 12,
            },
        ];

        let mut state = ViewState::new("avg_units", TableFlavor::Standard);
        state.cities.insert("ST GEORGE".to_string());

        let outcome = apply_view(&brands, &state);
        // City filter is a no-op for brands; descending average puts the
        // deeper-penetration brand first.
        assert_eq!(outcome.matched, 2);
        assert_eq!(outcome.rows[0].brand, "Meridian");
    }
}
