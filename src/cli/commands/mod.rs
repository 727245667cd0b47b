pub mod add;
pub mod cancel;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod delete;
pub mod edit;
pub mod init;
pub mod lang;
pub mod list;
pub mod log;
pub mod save;
pub mod set;
pub mod show;
