//! Backend API client.

use std::path::Path;

use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::config::{Config, EndpointConfig};
use crate::filters::FilterCriteria;
use crate::session::{AuthTokens, SessionStore, User};

use super::error::ApiError;
use super::types::{
    ChatRequest, Email, FetchEmailsResponse, LoginRequest, ProcessUrlRequest, QueryRequest,
    QueryResponse, RawAck, RegisterRequest, TokenResponse,
};

/// Client for the RAG email backend. Cheap to clone; clones share the
/// underlying connection pool, so spawned tasks can take their own.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    endpoints: EndpointConfig,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.backend.effective_base_url(),
            endpoints: config.endpoints.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch emails matching the criteria, merging the independent
    /// sender search box into the query string.
    pub async fn fetch_emails(
        &self,
        criteria: &FilterCriteria,
        sender_search: &str,
    ) -> Result<Vec<Email>, ApiError> {
        let pairs = criteria.to_query_pairs(sender_search);
        let response = self
            .client
            .get(self.url(&self.endpoints.fetch_emails))
            .query(&pairs)
            .send()
            .await?;

        let response = check(response).await?;
        let payload: FetchEmailsResponse = response.json().await?;
        Ok(payload.emails)
    }

    /// Sign in and persist the returned token pair in the session.
    pub async fn sign_in(
        &self,
        session: &mut SessionStore,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&self.endpoints.login))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let response = check(response).await?;
        let tokens: TokenResponse = response.json().await?;
        store_tokens(session, tokens)
    }

    /// Register a new account. The backend may return tokens right
    /// away; when it does they are stored like a sign-in.
    pub async fn sign_up(
        &self,
        session: &mut SessionStore,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&self.endpoints.register))
            .json(&RegisterRequest {
                first_name,
                last_name,
                email,
                password,
            })
            .send()
            .await?;

        let response = check(response).await?;
        // Token issuance on register is optional
        if let Ok(tokens) = response.json::<TokenResponse>().await {
            store_tokens(session, tokens)?;
        }
        Ok(())
    }

    /// Notify the backend and clear the local session. The local clear
    /// happens even if the backend call fails: sign-out must always
    /// leave the client signed out.
    pub async fn sign_out(&self, session: &mut SessionStore) -> Result<(), ApiError> {
        let result = self
            .client
            .post(self.url(&self.endpoints.logout))
            .send()
            .await;

        session
            .clear()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        if let Ok(response) = result {
            check(response).await?;
        }
        Ok(())
    }

    /// The signed-in user, or None. Purely session-derived; no request.
    pub fn current_user(&self, session: &SessionStore) -> Option<User> {
        session.current_user()
    }

    /// Upload documents for indexing, one repeated `documents` part per
    /// file.
    pub async fn upload_documents(&self, paths: &[std::path::PathBuf]) -> Result<RawAck, ApiError> {
        if paths.is_empty() {
            return Err(ApiError::Validation("No files staged for upload".to_string()));
        }

        let mut form = Form::new();
        for path in paths {
            form = form.part("documents", file_part(path).await?);
        }

        let response = self
            .client
            .post(self.url(&self.endpoints.upload_documents))
            .multipart(form)
            .send()
            .await?;

        let response = check(response).await?;
        Ok(response.json().await.unwrap_or(RawAck::Null))
    }

    /// Hand a URL (or comma-separated list) to the backend for ingestion.
    pub async fn process_url(&self, urls: &str) -> Result<RawAck, ApiError> {
        let response = self
            .client
            .post(self.url(&self.endpoints.process_url))
            .json(&ProcessUrlRequest { urls })
            .send()
            .await?;

        let response = check(response).await?;
        Ok(response.json().await.unwrap_or(RawAck::Null))
    }

    /// Query the RAG system; returns the answer text.
    pub async fn query(&self, prompt: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.url(&self.endpoints.query))
            .json(&QueryRequest { prompt })
            .send()
            .await?;

        let response = check(response).await?;
        let payload: QueryResponse = response.json().await?;
        Ok(payload.data)
    }

    /// Free-form chat with the assistant.
    pub async fn chat(&self, message: &str) -> Result<RawAck, ApiError> {
        let response = self
            .client
            .post(self.url(&self.endpoints.chat))
            .json(&ChatRequest { message })
            .send()
            .await?;

        let response = check(response).await?;
        Ok(response.json().await.unwrap_or(RawAck::Null))
    }

    /// Submit an image plus prompt for analysis.
    pub async fn analyze_image(&self, image: &Path, prompt: &str) -> Result<RawAck, ApiError> {
        let form = Form::new()
            .part("image", file_part(image).await?)
            .text("prompt", prompt.to_string());

        let response = self
            .client
            .post(self.url(&self.endpoints.analyze_image))
            .multipart(form)
            .send()
            .await?;

        let response = check(response).await?;
        Ok(response.json().await.unwrap_or(RawAck::Null))
    }
}

/// Turn a non-2xx response into a normalized [`ApiError`], surfacing a
/// structured `detail`/`message` body when the backend sent one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

async fn file_part(path: &Path) -> Result<Part, ApiError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ApiError::Validation(format!("Not a file: {}", path.display())))?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::Validation(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(Part::bytes(bytes).file_name(name))
}

fn store_tokens(session: &mut SessionStore, tokens: TokenResponse) -> Result<(), ApiError> {
    session
        .store(AuthTokens {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
        .map_err(|e| ApiError::Validation(e.to_string()))
}
