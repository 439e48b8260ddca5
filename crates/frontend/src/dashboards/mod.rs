pub mod d410_territory_yoy;

pub use d410_territory_yoy::ui::TerritoryDashboard;
