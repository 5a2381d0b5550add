use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::dto::quote_dto::CreateQuoteRequest;
use crate::model::contact::ContactInfo;
use crate::model::project::Project;
use crate::model::quote::QuoteRequest;
use crate::model::service::Service;

/// Client-side failure taxonomy: transport problems versus errors the server
/// reported about the request itself.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Observable state of one fetch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Pending,
    Success(T),
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchState::Failure(_))
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// HTTP client for the backend API. Configuration is passed in explicitly;
/// the client never reads the process environment.
pub struct ApiClient {
    config: ClientConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(ApiClient { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    async fn api_error(resp: reqwest::Response) -> FetchError {
        let status = resp.status().as_u16();
        let message = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "request failed".to_string());
        FetchError::Api { status, message }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, FetchError> {
        self.get_json("/services").await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_json("/projects").await
    }

    pub async fn contact_info(&self) -> Result<ContactInfo, FetchError> {
        self.get_json("/contact-info").await
    }

    pub async fn submit_quote(
        &self,
        input: &CreateQuoteRequest,
    ) -> Result<QuoteRequest, FetchError> {
        let url = self.url("/quote");
        debug!("POST {}", url);
        let resp = self.http.post(&url).json(input).send().await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }
}

/// Listing state for the services and projects pages. A failed refresh keeps
/// whatever was last displayed.
#[derive(Default)]
pub struct ContentView {
    services: Vec<Service>,
    projects: Vec<Project>,
    services_state: FetchState<()>,
    projects_state: FetchState<()>,
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn services_state(&self) -> &FetchState<()> {
        &self.services_state
    }

    pub fn projects_state(&self) -> &FetchState<()> {
        &self.projects_state
    }

    pub async fn refresh_services(&mut self, client: &ApiClient) {
        self.services_state = FetchState::Pending;
        match client.list_services().await {
            Ok(items) => {
                self.services = items;
                self.services_state = FetchState::Success(());
            }
            Err(e) => {
                error!("Failed to refresh services: {e}");
                self.services_state = FetchState::Failure(e.to_string());
            }
        }
    }

    pub async fn refresh_projects(&mut self, client: &ApiClient) {
        self.projects_state = FetchState::Pending;
        match client.list_projects().await {
            Ok(items) => {
                self.projects = items;
                self.projects_state = FetchState::Success(());
            }
            Err(e) => {
                error!("Failed to refresh projects: {e}");
                self.projects_state = FetchState::Failure(e.to_string());
            }
        }
    }
}

/// Quote form state. Field values survive a failed submission so the visitor
/// never re-types; a successful submission resets the form and keeps the
/// server receipt for the confirmation view.
#[derive(Debug, Default)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub address: String,
    pub message: String,
    state: FetchState<QuoteRequest>,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<QuoteRequest> {
        &self.state
    }

    fn to_input(&self) -> CreateQuoteRequest {
        CreateQuoteRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service_type: self.service_type.clone(),
            address: Some(self.address.clone()),
            message: Some(self.message.clone()),
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.service_type.clear();
        self.address.clear();
        self.message.clear();
    }

    /// Submit the current field values. Ignored while a submission is already
    /// pending, so a double-click cannot produce two requests.
    pub async fn submit(&mut self, client: &ApiClient) {
        if self.state.is_pending() {
            return;
        }
        let input = self.to_input();
        self.state = FetchState::Pending;
        match client.submit_quote(&input).await {
            Ok(receipt) => {
                self.clear_fields();
                self.state = FetchState::Success(receipt);
            }
            Err(e) => {
                error!("Failed to submit quote: {e}");
                self.state = FetchState::Failure(e.to_string());
            }
        }
    }
}
