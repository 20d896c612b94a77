pub mod backup;
pub mod calendar;
pub mod log;
pub mod range_copy;
pub mod vacation;
pub mod validate;
