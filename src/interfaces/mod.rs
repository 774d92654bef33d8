//! Adapters for the outside world (CSV export).

pub mod csv;
