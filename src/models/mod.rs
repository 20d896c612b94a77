pub mod absence;
pub mod day_entry;
pub mod month;
pub mod vacation;
pub mod worker;
