pub mod database;
pub mod report;
pub mod sequence;
