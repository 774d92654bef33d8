use crate::domain::catalog::Catalog;
use crate::domain::payment::{CheckoutSession, PaymentDetails, Receipt};
use crate::domain::ports::KvStoreBox;
use crate::error::{EnrollmentError, Result};
use rust_decimal::Decimal;

/// Store key holding the JSON-encoded array of selected course names.
pub const SELECTED_COURSES_KEY: &str = "selectedCourses";

/// One line of the fee summary: a selected course and its catalog price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeLine {
    pub course: String,
    pub price: Decimal,
}

/// The fee summary over the current ledger: per-course lines plus the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSummary {
    pub lines: Vec<FeeLine>,
    pub total: Decimal,
}

/// The main entry point for the enrollment flow.
///
/// `EnrollmentEngine` owns the persistent ledger of selected courses and the
/// static catalog it is priced against. Every mutation is a single
/// read-modify-write against the store, awaited to completion before the
/// caller continues; a store failure leaves the persisted ledger in its
/// pre-action state.
pub struct EnrollmentEngine {
    store: KvStoreBox,
    catalog: Catalog,
}

impl EnrollmentEngine {
    pub fn new(store: KvStoreBox, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current ledger, in enrollment order. Absent key means empty.
    pub async fn selected_courses(&self) -> Result<Vec<String>> {
        match self.store.get(SELECTED_COURSES_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Reads the full ledger from the store on every check.
    pub async fn is_enrolled(&self, course: &str) -> Result<bool> {
        let selected = self.selected_courses().await?;
        Ok(selected.iter().any(|c| c == course))
    }

    /// Removes the course if enrolled, appends it otherwise. Only catalog
    /// names are accepted, which keeps every ledger entry priceable.
    /// Returns the new enrolled state.
    pub async fn toggle_enrollment(&self, course: &str) -> Result<bool> {
        if !self.catalog.contains(course) {
            return Err(EnrollmentError::UnknownCourse(course.to_string()));
        }

        let mut selected = self.selected_courses().await?;
        let enrolled = if let Some(pos) = selected.iter().position(|c| c == course) {
            selected.remove(pos);
            false
        } else {
            selected.push(course.to_string());
            true
        };

        self.write_ledger(&selected).await?;
        Ok(enrolled)
    }

    /// Unconditional removal, used from the fee summary view. No-op when the
    /// course is not in the ledger.
    pub async fn remove_course(&self, course: &str) -> Result<()> {
        let mut selected = self.selected_courses().await?;
        let before = selected.len();
        selected.retain(|c| c != course);

        if selected.len() != before {
            self.write_ledger(&selected).await?;
        }
        Ok(())
    }

    /// Empties the ledger and deletes the backing record.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(SELECTED_COURSES_KEY).await
    }

    /// Prices the current ledger against the catalog.
    ///
    /// Deterministic and idempotent for an unchanged ledger. A persisted
    /// name missing from the catalog fails with `UnknownCourse` instead of
    /// producing a partial total.
    pub async fn fee_summary(&self) -> Result<FeeSummary> {
        let selected = self.selected_courses().await?;

        let mut lines = Vec::with_capacity(selected.len());
        let mut total = Decimal::ZERO;
        for course in selected {
            let price = self.catalog.price(&course)?;
            total += price;
            lines.push(FeeLine { course, price });
        }

        Ok(FeeSummary { lines, total })
    }

    /// Runs the simulated payment over the current ledger.
    ///
    /// An empty ledger or incomplete payment details fail validation and
    /// leave the ledger untouched. Once the details pass, the session
    /// completes, the ledger is cleared, and the receipt is returned.
    pub async fn checkout(&self, details: &PaymentDetails) -> Result<Receipt> {
        let summary = self.fee_summary().await?;
        if summary.lines.is_empty() {
            return Err(EnrollmentError::Validation(
                "No courses selected".to_string(),
            ));
        }

        let courses = summary.lines.into_iter().map(|l| l.course).collect();
        let mut session = CheckoutSession::new(courses, summary.total);
        let receipt = session.submit(details)?;

        self.clear().await?;
        Ok(receipt)
    }

    async fn write_ledger(&self, selected: &[String]) -> Result<()> {
        let encoded = serde_json::to_string(selected)?;
        self.store.set(SELECTED_COURSES_KEY, encoded).await
    }
}
