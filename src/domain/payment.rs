use crate::error::{EnrollmentError, Result};
use rust_decimal::Decimal;

/// Payment details for the simulated checkout. One variant per method the
/// purchase screen offers; validity means every field of the chosen method is
/// non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    Card {
        number: String,
        expiry: String,
        cvc: String,
    },
    EWallet {
        wallet_id: String,
    },
}

impl PaymentDetails {
    pub fn method_label(&self) -> &'static str {
        match self {
            PaymentDetails::Card { .. } => "Card",
            PaymentDetails::EWallet { .. } => "E-Wallet",
        }
    }

    pub fn validate(&self) -> Result<()> {
        let complete = match self {
            PaymentDetails::Card {
                number,
                expiry,
                cvc,
            } => {
                !number.trim().is_empty() && !expiry.trim().is_empty() && !cvc.trim().is_empty()
            }
            PaymentDetails::EWallet { wallet_id } => !wallet_id.trim().is_empty(),
        };
        if complete {
            Ok(())
        } else {
            Err(EnrollmentError::Validation(format!(
                "Please enter complete {} details",
                self.method_label().to_lowercase()
            )))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CheckoutState {
    #[default]
    AwaitingPaymentDetails,
    Completed,
}

/// Confirmation summary produced when a checkout completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub courses: Vec<String>,
    pub total: Decimal,
    pub method: &'static str,
}

/// The two-state checkout machine. Built from a ledger snapshot and its
/// total; `submit` either reports a validation failure and stays in
/// `AwaitingPaymentDetails`, or transitions to the terminal `Completed`
/// state and yields the receipt. Clearing the ledger is the caller's job.
#[derive(Debug)]
pub struct CheckoutSession {
    courses: Vec<String>,
    total: Decimal,
    state: CheckoutState,
}

impl CheckoutSession {
    pub fn new(courses: Vec<String>, total: Decimal) -> Self {
        Self {
            courses,
            total,
            state: CheckoutState::AwaitingPaymentDetails,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn submit(&mut self, details: &PaymentDetails) -> Result<Receipt> {
        details.validate()?;
        self.state = CheckoutState::Completed;
        Ok(Receipt {
            courses: self.courses.clone(),
            total: self.total,
            method: details.method_label(),
        })
    }
}
