pub mod day;
pub mod stats;
