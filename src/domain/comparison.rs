// src/domain/comparison.rs

use crate::domain::record::ResultRecord;

/// Which side of a comparison came out cheaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cheaper {
    Previous,
    Current,
    Even,
}

/// Side-by-side outcome for two finished records, typically a previous
/// search held by the caller and a fresh one.
#[derive(Debug, PartialEq)]
pub struct CostComparison {
    /// Current total minus previous total. `None` unless both records carry
    /// a real total cost.
    pub total_cost_delta: Option<f64>,
}

impl CostComparison {
    pub fn cheaper(&self) -> Option<Cheaper> {
        let delta = self.total_cost_delta?;
        Some(if delta > 0.0 {
            Cheaper::Previous
        } else if delta < 0.0 {
            Cheaper::Current
        } else {
            Cheaper::Even
        })
    }
}

/// Compares the combined monthly cost of two records. Sentinel totals make
/// the comparison undefined rather than producing nonsense arithmetic.
pub fn compare(previous: &ResultRecord, current: &ResultRecord) -> CostComparison {
    let total_cost_delta = if previous.total_cost >= 0.0 && current.total_cost >= 0.0 {
        Some(current.total_cost - previous.total_cost)
    } else {
        None
    };

    CostComparison { total_cost_delta }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_total(total: f64) -> ResultRecord {
        let mut record = ResultRecord::new("123 N MONROE ST", "99201");
        record.avg = 100.0;
        record.zestimate = total - 100.0;
        record.derive_total_cost();
        record
    }

    #[test]
    fn delta_points_at_the_cheaper_side() {
        let previous = record_with_total(1800.0);
        let current = record_with_total(1500.0);

        let comparison = compare(&previous, &current);
        assert_eq!(comparison.total_cost_delta, Some(-300.0));
        assert_eq!(comparison.cheaper(), Some(Cheaper::Current));
    }

    #[test]
    fn sentinel_totals_make_the_comparison_undefined() {
        let previous = record_with_total(1800.0);
        let current = ResultRecord::new("700 W 5TH AVE", "99204");

        let comparison = compare(&previous, &current);
        assert_eq!(comparison.total_cost_delta, None);
        assert_eq!(comparison.cheaper(), None);
    }
}
