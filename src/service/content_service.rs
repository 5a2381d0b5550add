use tracing::{error, info, instrument};

use crate::model::contact::ContactInfo;
use crate::model::project::Project;
use crate::model::service::Service;
use crate::repository::content_repo::ContentRepository;
use crate::util::error::ServiceError;

use async_trait::async_trait;
use std::sync::Arc;

/// Read side of the site: pure listings, no pagination or filtering.
#[async_trait]
pub trait ContentService: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError>;
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError>;
    async fn contact_info(&self) -> Result<ContactInfo, ServiceError>;
}

pub struct ContentServiceImpl {
    pub content_repo: Arc<dyn ContentRepository>,
}

impl ContentServiceImpl {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        ContentServiceImpl { content_repo }
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    #[instrument(skip(self))]
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        let res = self.content_repo.list_services().await;
        match &res {
            Ok(services) => info!("Fetched {} services", services.len()),
            Err(e) => error!("Failed to list services: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        let res = self.content_repo.list_projects().await;
        match &res {
            Ok(projects) => info!("Fetched {} projects", projects.len()),
            Err(e) => error!("Failed to list projects: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn contact_info(&self) -> Result<ContactInfo, ServiceError> {
        let res = self.content_repo.contact_info().await;
        if let Err(e) = &res {
            error!("Failed to fetch contact info: {e}");
        }
        res.map_err(ServiceError::from)
    }
}
