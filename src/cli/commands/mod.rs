pub mod absence;
pub mod backup;
pub mod config;
pub mod copy;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod set;
pub mod show;
pub mod sign;
pub mod vacation;
pub mod worker;
