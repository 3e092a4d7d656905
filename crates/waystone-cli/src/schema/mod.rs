pub mod config;
pub mod item_record;
pub mod report;
