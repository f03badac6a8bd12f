pub mod columns;
pub mod metric;
pub mod raw_table;
pub mod views;
