pub mod calculator;
pub mod confirm;
pub mod ids;
pub mod log;
pub mod logic;
pub mod persistence;
pub mod save;
pub mod state;
pub mod sync;
pub mod table;
