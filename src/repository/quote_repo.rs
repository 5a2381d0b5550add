use crate::model::quote::{NewQuoteRequest, QuoteRequest};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use tracing::{error, info};
use uuid::Uuid;

/// Append-only store of quote requests. `create` assigns the id and creation
/// timestamp; records are never updated or deleted.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, input: NewQuoteRequest) -> RepositoryResult<QuoteRequest>;
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<QuoteRequest>;
    async fn list(&self) -> RepositoryResult<Vec<QuoteRequest>>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct InMemoryQuoteRepository {
    quotes: RwLock<Vec<QuoteRequest>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        InMemoryQuoteRepository {
            quotes: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    #[tracing::instrument(skip(self, input), fields(service_type = %input.service_type))]
    async fn create(&self, input: NewQuoteRequest) -> RepositoryResult<QuoteRequest> {
        let quote = QuoteRequest {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            service_type: input.service_type,
            address: input.address,
            message: input.message,
            created_at: Utc::now(),
        };
        let mut quotes = self.quotes.write().map_err(|_| {
            error!("Quote store lock poisoned");
            RepositoryError::unavailable("quote store lock poisoned")
        })?;
        quotes.push(quote.clone());
        info!("Quote request saved: {}", quote.id);
        Ok(quote)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<QuoteRequest> {
        let quotes = self
            .quotes
            .read()
            .map_err(|_| RepositoryError::unavailable("quote store lock poisoned"))?;
        match quotes.iter().find(|q| q.id == id) {
            Some(quote) => Ok(quote.clone()),
            None => {
                error!("Quote not found for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "Quote not found for ID: {}",
                    id
                )))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        let quotes = self
            .quotes
            .read()
            .map_err(|_| RepositoryError::unavailable("quote store lock poisoned"))?;
        info!("Fetched {} quotes", quotes.len());
        Ok(quotes.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let quotes = self
            .quotes
            .read()
            .map_err(|_| RepositoryError::unavailable("quote store lock poisoned"))?;
        Ok(quotes.len() as u64)
    }
}
