pub mod fetcher;

pub use fetcher::{ApiClient, ContentView, FetchError, FetchState, QuoteForm};
