pub mod account_detail;
pub mod account_table;
pub mod all_accounts;
pub mod brand_table;
pub mod dashboard;
pub mod frame_trends;
pub mod insight_banners;
pub mod summary_cards;

pub use dashboard::TerritoryDashboard;
