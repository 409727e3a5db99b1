// search.rs
use crate::address;
use crate::db::billing::resolve_utility_bills;
use crate::db::connection::Database;
use crate::domain::record::{AddressQuery, ResultRecord};
use crate::valuation::{extract_fields, ValuationSource};

/// Runs one search end to end: cook the address, resolve the utility bills,
/// fetch and extract the valuation figures, then derive the combined costs.
///
/// There is no failure path. A store error or a failed fetch is logged to
/// stderr and the fields it would have filled stay at their sentinels, so
/// the caller always gets a structurally complete record.
pub fn handle_search<V: ValuationSource>(
    db: &Database,
    valuation: &V,
    query: &AddressQuery,
) -> ResultRecord {
    let cooked = address::normalize(&query.raw_address);
    let mut record = ResultRecord::new(cooked, query.zipcode.clone());

    // The two lookups share the cooked address but not their results; the
    // resolver runs first because its fallback may rewrite the key the
    // valuation query then uses.
    if let Err(e) = resolve_utility_bills(db, &mut record) {
        eprintln!(
            "⚠️ Utility lookup failed for '{}': {e}",
            record.cooked_address
        );
    }

    match valuation.fetch_listing(&record.cooked_address, &record.zipcode) {
        Ok(body) => {
            let fields = extract_fields(&body);

            if let Some(rent) = fields.rent_zestimate {
                record.zestimate = rent as f64;
            }

            if let Some(sq_ft) = fields.finished_sq_ft {
                record.sq_ft = sq_ft as f64;
                record.derive_cost_per_sq_ft();
            }
        }
        Err(e) => {
            eprintln!(
                "⚠️ Valuation fetch failed for '{}': {e}",
                record.cooked_address
            );
        }
    }

    record.derive_total_cost();
    record
}
