mod client;
mod extract;
mod valuation_error;

pub use client::{build_query_url, ValuationSource, ZillowClient};
pub use extract::{extract_fields, ValuationFields};
pub use valuation_error::ValuationError;
