pub mod day_view;
pub mod entry;
