use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::quote_dto::CreateQuoteRequest;
use crate::model::quote::QuoteRequest;
use crate::repository::quote_repo::QuoteRepository;
use crate::util::email::QuoteNotifier;
use crate::util::error::ServiceError;

use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Validate and persist a quote request. Validation runs before any
    /// persistence attempt; a storage failure leaves no partial record.
    async fn submit_quote(&self, input: CreateQuoteRequest) -> Result<QuoteRequest, ServiceError>;
    async fn get_quote(&self, id: Uuid) -> Result<QuoteRequest, ServiceError>;
    async fn list_quotes(&self) -> Result<Vec<QuoteRequest>, ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: Arc<dyn QuoteRepository>,
    /// Post-persistence collaborator; its failure never rolls back the record.
    pub notifier: Option<Arc<dyn QuoteNotifier>>,
}

impl QuoteServiceImpl {
    pub fn new(quote_repo: Arc<dyn QuoteRepository>, notifier: Option<Arc<dyn QuoteNotifier>>) -> Self {
        QuoteServiceImpl { quote_repo, notifier }
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, input), fields(service_type = %input.service_type))]
    async fn submit_quote(&self, input: CreateQuoteRequest) -> Result<QuoteRequest, ServiceError> {
        if let Err(errors) = input.validate() {
            error!("Quote submission rejected: {errors}");
            return Err(ServiceError::Validation(errors));
        }

        let created = self
            .quote_repo
            .create(input.into_new())
            .await
            .map_err(ServiceError::from)?;
        info!("Quote registered successfully: {}", created.id);

        // Best-effort notification, detached from the request.
        if let Some(notifier) = &self.notifier {
            let notifier = notifier.clone();
            let quote = created.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier.notify_new_quote(&quote).await {
                    error!("Failed to send quote notification for {}: {e}", quote.id);
                } else {
                    info!("Email notification sent for quote: {}", quote.id);
                }
            });
        }

        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_quote(&self, id: Uuid) -> Result<QuoteRequest, ServiceError> {
        let res = self.quote_repo.get_by_id(id).await;
        match &res {
            Ok(_) => info!("Quote fetched successfully"),
            Err(e) => error!("Failed to fetch quote: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_quotes(&self) -> Result<Vec<QuoteRequest>, ServiceError> {
        let res = self.quote_repo.list().await;
        match &res {
            Ok(quotes) => info!("Fetched {} quotes", quotes.len()),
            Err(e) => error!("Failed to list quotes: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
