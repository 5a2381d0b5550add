pub mod content_handler;
pub mod quote_handler;
