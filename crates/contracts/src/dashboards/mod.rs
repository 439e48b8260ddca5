pub mod d410_territory_yoy;
