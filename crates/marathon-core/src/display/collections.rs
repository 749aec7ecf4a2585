//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::PlanSummary;

/// Newtype wrapper for displaying a user's saved plans.
///
/// Each summary renders with its own `##` header; an empty collection prints
/// a single "No plans found." line.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}
