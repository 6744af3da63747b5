pub mod classify;
pub mod join;
