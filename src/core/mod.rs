pub mod assembler;
pub mod break_time;
pub mod calendar;
pub mod fetch;
pub mod mock;
pub mod reducer;
pub mod session;
pub mod time_math;
