//! Domain layer: the course catalog, the user account, payment details and
//! the storage port the application services are built on.

pub mod account;
pub mod catalog;
pub mod payment;
pub mod ports;
