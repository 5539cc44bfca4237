// Fatal refresh errors

use crate::feed::source::FetchError;
use crate::stats::DataIntegrityFault;
use thiserror::Error;

/// A refresh cycle failure that ends the program
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("{stage} stage failed: {0}", stage = .0.stage())]
    Fetch(#[from] FetchError),

    #[error("aggregation stage failed: {0}")]
    Integrity(#[from] DataIntegrityFault),

    /// The terminal stopped delivering key presses, so quit is unreachable
    #[error("input stage failed: {0}")]
    Input(String),
}

impl RefreshError {
    pub fn stage(&self) -> &'static str {
        match self {
            RefreshError::Fetch(e) => e.stage(),
            RefreshError::Integrity(_) => "aggregation",
            RefreshError::Input(_) => "input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_in_message() {
        let fetch = RefreshError::from(FetchError::Status {
            url: "https://example.invalid".to_string(),
            status: 502,
        });
        assert_eq!(fetch.stage(), "fetch");
        assert!(fetch.to_string().starts_with("fetch stage failed:"));

        let integrity = RefreshError::from(DataIntegrityFault::UnknownRating {
            callsign: "EGLL_TWR".to_string(),
            rating_id: 77,
        });
        assert_eq!(integrity.stage(), "aggregation");
        assert!(integrity.to_string().starts_with("aggregation stage failed:"));
    }

    #[test]
    fn test_decode_stage_in_message() {
        let decode = FetchError::from(crate::feed::Snapshot::from_json(b"[]").unwrap_err());
        let err = RefreshError::from(decode);

        assert_eq!(err.stage(), "decode");
        assert!(err
            .to_string()
            .starts_with("decode stage failed: feed body could not be decoded:"));
    }
}
