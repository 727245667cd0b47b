pub mod calculation;
pub mod date_range;
pub mod period;
pub mod row;
pub mod table_kind;
