use thiserror::Error;

/// Failure of a single API call, already normalised for display.
///
/// `Display` yields the text shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Unable to connect to server: {0}")]
    Network(String),

    /// A success response whose body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// Non-success status; `detail` is the server message or a generic fallback.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
}

impl ApiError {
    /// Wraps a transport level error.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Wraps a body decoding error.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// HTTP status of a rejection.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_detail_only() {
        let error = ApiError::Rejected {
            status: 404,
            detail: "Todo not found".into(),
        };
        assert_eq!(error.to_string(), "Todo not found");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_network_and_decode_have_no_status() {
        let network = ApiError::network("connection refused");
        assert_eq!(network.status(), None);
        assert_eq!(
            network.to_string(),
            "Unable to connect to server: connection refused"
        );
        assert_eq!(ApiError::decode("missing field `id`").status(), None);
    }
}
