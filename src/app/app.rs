use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::EmailConfig;
use crate::repository::content_repo::InMemoryContentRepository;
use crate::repository::quote_repo::InMemoryQuoteRepository;
use crate::router::api_router;
use crate::service::content_service::ContentServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::email::{QuoteNotifier, SmtpQuoteNotifier};

pub struct App {
    config: AppConfig,
    router: Router,
    pub content_service: Arc<ContentServiceImpl>,
    pub quote_service: Arc<QuoteServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();

        let content_repo = Arc::new(InMemoryContentRepository::with_default_catalog());
        let quote_repo = Arc::new(InMemoryQuoteRepository::new());

        // Notifications are optional: without SMTP configuration the intake
        // flow runs unchanged, it just stays quiet.
        let notifier: Option<Arc<dyn QuoteNotifier>> = match EmailConfig::from_env() {
            Ok(email_config) => match SmtpQuoteNotifier::new(email_config) {
                Ok(n) => {
                    info!("Quote email notifications enabled");
                    Some(Arc::new(n))
                }
                Err(e) => {
                    warn!("Quote email notifications disabled: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("Quote email notifications disabled: {e}");
                None
            }
        };

        let content_service = Arc::new(ContentServiceImpl::new(content_repo));
        let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo, notifier));

        let router = Self::create_router(&config, content_service.clone(), quote_service.clone());

        App {
            config,
            router,
            content_service,
            quote_service,
        }
    }

    fn create_router(
        config: &AppConfig,
        content_service: Arc<ContentServiceImpl>,
        quote_service: Arc<QuoteServiceImpl>,
    ) -> Router {
        let cors = if config.cors_origins.iter().any(|o| o == "*") {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        api_router(content_service, quote_service)
            .layer(cors)
            .layer(CompressionLayer::new())
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}
