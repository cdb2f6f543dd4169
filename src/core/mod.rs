pub mod backup;
pub mod config;
pub mod entry;
pub mod log;
pub mod month;
pub mod time_calc;
