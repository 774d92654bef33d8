//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `AuthGate` guarding entry into the catalog flow
//! and the `EnrollmentEngine` which owns the enrollment ledger, the fee
//! calculation over it, and the simulated checkout.

pub mod auth;
pub mod engine;
