// src/domain/record.rs

use serde::Serialize;

/// Marker for "not found / not computed". Never a real cost: every consumer
/// must gate arithmetic behind a `>= 0.0` check.
pub const NOT_FOUND: f64 = -1.0;

/// One search as supplied by the caller. No validation happens here; empty
/// strings are legal and simply match nothing.
#[derive(Debug, Clone)]
pub struct AddressQuery {
    pub raw_address: String,
    pub zipcode: String,
}

/// The finished product of one search: utility bill figures joined with the
/// valuation figures for the same address, plus the two derived costs.
///
/// A record is built fresh per query with every numeric field at the
/// sentinel, filled in as each stage of the pipeline runs, and never touched
/// again after it is handed to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// The normalized address actually used as the lookup key. Always set.
    pub cooked_address: String,
    /// Echo of the caller's ZIP.
    pub zipcode: String,
    pub high: f64,
    pub low: f64,
    pub avg: f64,
    pub zestimate: f64,
    pub sq_ft: f64,
    pub avg_utility_cost_per_sq_ft: f64,
    pub total_cost: f64,
}

impl ResultRecord {
    pub fn new(cooked_address: impl Into<String>, zipcode: impl Into<String>) -> Self {
        Self {
            cooked_address: cooked_address.into(),
            zipcode: zipcode.into(),
            high: NOT_FOUND,
            low: NOT_FOUND,
            avg: NOT_FOUND,
            zestimate: NOT_FOUND,
            sq_ft: NOT_FOUND,
            avg_utility_cost_per_sq_ft: NOT_FOUND,
            total_cost: NOT_FOUND,
        }
    }

    /// Derives the per-square-foot utility rate, rounded to cents. Needs a
    /// real average bill and a strictly positive footage; a zero footage is
    /// treated like a missing one rather than dividing by it.
    pub fn derive_cost_per_sq_ft(&mut self) {
        if self.avg >= 0.0 && self.sq_ft > 0.0 {
            self.avg_utility_cost_per_sq_ft = round_to_cents(self.avg / self.sq_ft);
        }
    }

    /// Derives the combined monthly cost when both sources delivered.
    pub fn derive_total_cost(&mut self) {
        if self.avg >= 0.0 && self.zestimate >= 0.0 {
            self.total_cost = self.avg + self.zestimate;
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
