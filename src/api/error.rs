use serde::Deserialize;

/// Normalized failure surface for every backend operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network unreachable, DNS failure, connection reset
    #[error("Failed to connect to the server: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the body's `detail`/`message`
    /// field when present, otherwise a generic status description
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Client-side input rejected before any request was made
    #[error("{0}")]
    Validation(String),
}

/// Structured error body shape used by the backend. Some routes emit
/// `detail`, others `message`; either one wins over the raw status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a backend error from a non-2xx response body, surfacing
    /// the structured message verbatim when one exists.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = extract_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self::Backend { status, message }
    }
}

fn extract_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed.detail.or(parsed.message).filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_surfaced_verbatim() {
        let err = ApiError::from_response(404, br#"{"detail":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_message_field_surfaced_when_no_detail() {
        let err = ApiError::from_response(500, br#"{"message":"backend exploded"}"#);
        assert_eq!(err.to_string(), "backend exploded");
    }

    #[test]
    fn test_detail_wins_over_message() {
        let err = ApiError::from_response(400, br#"{"detail":"bad cap","message":"ignored"}"#);
        assert_eq!(err.to_string(), "bad cap");
    }

    #[test]
    fn test_unstructured_body_gets_generic_message() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = ApiError::from_response(503, b"{}");
        assert_eq!(err.to_string(), "Request failed with status 503");
    }

    #[test]
    fn test_status_preserved() {
        match ApiError::from_response(401, br#"{"detail":"Login failed"}"#) {
            ApiError::Backend { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Login failed");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
