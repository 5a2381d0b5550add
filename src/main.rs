use dotenv::dotenv;
use roofing_backend::app::app::App;
use roofing_backend::util::logger::Logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let logger = Logger::new().expect("Failed to initialize logging");

    info!("Starting 22G Roofing backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;

    drop(logger);
}
