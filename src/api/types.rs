//! Wire types for the backend contract.

use serde::{Deserialize, Serialize};

/// A single retrievable email as returned by `fetch-emails`. Immutable
/// once fetched; a new fetch replaces the whole collection.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Email {
    pub id: String,
    #[serde(default)]
    pub thread_id: String,
    pub sender: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub date: String,
    /// ISO-8601 receive timestamp; ordered lexicographically
    #[serde(default)]
    pub email_received_at: String,
    #[serde(default)]
    pub unread: bool,
    /// Label order is display-only
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FetchEmailsResponse {
    #[serde(default)]
    pub emails: Vec<Email>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    #[serde(rename = "lastName")]
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessUrlRequest<'a> {
    pub urls: &'a str,
}

#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Backend-defined acknowledgements (upload, url ingest, chat, image
/// analysis) are kept as raw JSON; the UI only reports success.
pub type RawAck = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_deserializes_with_missing_optionals() {
        let json = r#"{"id":"1","sender":"a@example.com"}"#;
        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.id, "1");
        assert_eq!(email.subject, "");
        assert!(!email.unread);
        assert!(email.labels.is_empty());
    }

    #[test]
    fn test_fetch_response_tolerates_missing_list() {
        let resp: FetchEmailsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.emails.is_empty());
    }

    #[test]
    fn test_register_request_uses_camel_case_names() {
        let req = RegisterRequest {
            first_name: "Ada",
            last_name: "Lovelace",
            email: "ada@example.com",
            password: "pw",
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""firstName":"Ada""#));
        assert!(json.contains(r#""lastName":"Lovelace""#));
    }
}
