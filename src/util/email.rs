use crate::config::{ConfigError, EmailConfig};
use crate::model::quote::QuoteRequest;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, instrument};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Post-persistence collaborator notifying staff of a new quote request.
#[async_trait]
pub trait QuoteNotifier: Send + Sync {
    async fn notify_new_quote(&self, quote: &QuoteRequest) -> Result<(), EmailError>;
}

/// SMTP-backed notifier implementation
pub struct SmtpQuoteNotifier {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpQuoteNotifier {
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP quote notifier");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(std::time::Duration::from_secs(
                    config.connection_timeout_secs,
                )));

        if config.use_tls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;
            transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        if !config.smtp_username.is_empty() && !config.smtp_password.is_empty() {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            transport_builder = transport_builder.credentials(credentials);
        }

        let transport = transport_builder.build();

        info!("SMTP quote notifier initialized successfully");
        Ok(Self { config, transport })
    }

    fn sender(&self) -> Result<Mailbox, EmailError> {
        format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid sender address: {}", e)))
    }

    fn recipient(&self) -> Result<Mailbox, EmailError> {
        self.config
            .notification_email
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid recipient address: {}", e)))
    }
}

#[async_trait]
impl QuoteNotifier for SmtpQuoteNotifier {
    #[instrument(skip(self, quote), fields(id = %quote.id, service_type = %quote.service_type))]
    async fn notify_new_quote(&self, quote: &QuoteRequest) -> Result<(), EmailError> {
        info!("Sending new-quote notification");

        let message = Message::builder()
            .from(self.sender()?)
            .to(self.recipient()?)
            .subject(format!("New Quote Request - {}", quote.service_type))
            .header(ContentType::TEXT_HTML)
            .body(render_notification_html(quote))
            .map_err(|e| EmailError::MessageError(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::SmtpError(format!("Failed to send email: {}", e)))?;

        info!("New-quote notification sent");
        Ok(())
    }
}

fn render_notification_html(quote: &QuoteRequest) -> String {
    let row = |label: &str, value: &str| {
        format!(
            "<tr><td style=\"padding: 10px 0; font-weight: bold; color: #64748b;\">{}</td>\
             <td style=\"padding: 10px 0; color: #0f172a;\">{}</td></tr>",
            label, value
        )
    };
    let address = quote.address.as_deref().unwrap_or("Not provided");
    let message = quote.message.as_deref().unwrap_or("No message");
    format!(
        "<html><body style=\"font-family: Arial, sans-serif; padding: 20px;\">\
         <h1 style=\"color: #0f172a;\">New Quote Request</h1>\
         <table style=\"width: 100%; border-collapse: collapse;\">{}{}{}{}{}{}</table>\
         <p style=\"color: #64748b; font-size: 12px;\">Submitted on {}</p>\
         </body></html>",
        row("Name:", &quote.name),
        row("Email:", &quote.email),
        row("Phone:", &quote.phone),
        row("Service:", &quote.service_type),
        row("Address:", address),
        row("Message:", message),
        quote.created_at.format("%d %B %Y at %I:%M %p"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn notification_html_includes_submitted_fields() {
        let quote = QuoteRequest {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "0400000000".to_string(),
            service_type: "Re-Roofing".to_string(),
            address: None,
            message: Some("Leaking ridge cap".to_string()),
            created_at: Utc::now(),
        };
        let html = render_notification_html(&quote);
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("Re-Roofing"));
        assert!(html.contains("Not provided"));
        assert!(html.contains("Leaking ridge cap"));
    }
}
