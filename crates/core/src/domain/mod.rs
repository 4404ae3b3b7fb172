pub mod color;
pub mod indicators;
pub mod risk;
pub mod series;
