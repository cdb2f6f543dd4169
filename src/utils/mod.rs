pub mod colors;
pub mod date;
pub mod prompt;
pub mod table;
