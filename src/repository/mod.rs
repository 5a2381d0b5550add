pub mod content_repo;
pub mod quote_repo;
pub mod repository_error;
