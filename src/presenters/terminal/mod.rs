pub mod presenter;
pub mod stats_table;
