// client.rs
use crate::valuation::ValuationError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const DEEP_SEARCH_URL: &str = "https://www.zillow.com/webservice/GetDeepSearchResults.htm";

// Account key baked into the query template the service expects.
const ZWS_ID: &str = "X1-ZWz17kiq5jrqbv_1d5w6";

/// Anything that can produce a raw valuation listing body for an address.
/// The pipeline only needs the text; pulling figures out of it is a
/// separate, pure step (see `extract_fields`), which keeps this seam easy
/// to stub in tests.
pub trait ValuationSource {
    fn fetch_listing(&self, cooked_address: &str, zipcode: &str)
        -> Result<String, ValuationError>;
}

pub struct ZillowClient {
    client: Client,
}

impl ZillowClient {
    pub fn new() -> Result<Self, ValuationError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ValuationError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Builds the deep-search query: the cooked address dash-joined, the ZIP as
/// citystatezip, and rent estimates switched on.
pub fn build_query_url(cooked_address: &str, zipcode: &str) -> Result<Url, ValuationError> {
    let dashed_address = cooked_address.replace(' ', "-");

    Url::parse_with_params(
        DEEP_SEARCH_URL,
        &[
            ("zws-id", ZWS_ID),
            ("address", dashed_address.as_str()),
            ("citystatezip", zipcode),
            ("rentzestimate", "true"),
        ],
    )
    .map_err(|e| ValuationError::BadUrl(e.to_string()))
}

impl ValuationSource for ZillowClient {
    fn fetch_listing(
        &self,
        cooked_address: &str,
        zipcode: &str,
    ) -> Result<String, ValuationError> {
        let url = build_query_url(cooked_address, zipcode)?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ValuationError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ValuationError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ValuationError::BadStatus(format!("HTTP {status}: {text}")));
        }

        // Escape embedded quotes so the body stays one unbroken string if it
        // is ever re-embedded in a quoted context downstream.
        Ok(text.replace('"', "\\\""))
    }
}
