use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ValuationError {
    Network(String),
    BadStatus(String),
    BadUrl(String),
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationError::Network(msg) => write!(f, "Network error: {msg}"),
            ValuationError::BadStatus(msg) => write!(f, "Upstream rejected request: {msg}"),
            ValuationError::BadUrl(msg) => write!(f, "Bad query URL: {msg}"),
        }
    }
}

impl Error for ValuationError {}
