pub mod duration;
pub mod merge;
