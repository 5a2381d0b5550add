pub mod content_service;
pub mod quote_service;
