pub mod attendance;
pub mod message;
pub mod year_month;

pub use attendance::{AttendanceDay, AttendanceLedger};
pub use message::{SearchMatch, ThreadMessage};
pub use year_month::YearMonth;
