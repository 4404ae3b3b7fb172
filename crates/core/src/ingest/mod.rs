pub mod loader;

pub use loader::{load_indicator_table, read_table};
