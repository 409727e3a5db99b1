// src/domain/classify.rs

use crate::domain::record::ResultRecord;

/// Which of the five reportable figures a record actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentFields {
    pub high: bool,
    pub low: bool,
    pub avg: bool,
    pub zestimate: bool,
    pub avg_utility_cost_per_sq_ft: bool,
}

impl PresentFields {
    fn all(&self) -> bool {
        self.high && self.low && self.avg && self.zestimate && self.avg_utility_cost_per_sq_ft
    }

    fn none(&self) -> bool {
        !self.high && !self.low && !self.avg && !self.zestimate && !self.avg_utility_cost_per_sq_ft
    }
}

/// The three-way outcome a caller branches on when presenting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Every figure found; render the full listing.
    Complete,
    /// Nothing found at all; prompt the user to re-check the address or
    /// resubmit it for manual review.
    Empty,
    /// A mix; render what is there and placeholders for the rest.
    Partial(PresentFields),
}

/// Classifies a finished record. Recomputed by each consumer, never stored
/// on the record itself.
pub fn classify(record: &ResultRecord) -> Classification {
    let present = PresentFields {
        high: record.high >= 0.0,
        low: record.low >= 0.0,
        avg: record.avg >= 0.0,
        zestimate: record.zestimate >= 0.0,
        avg_utility_cost_per_sq_ft: record.avg_utility_cost_per_sq_ft >= 0.0,
    };

    if present.all() {
        Classification::Complete
    } else if present.none() {
        Classification::Empty
    } else {
        Classification::Partial(present)
    }
}
