pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::{format_clock, format_date_ja, weekday_ja};
