pub mod counters;
pub mod heronames;
