use football_server_rs::{api::Api, CONFIG};
use tracing::log;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = Api::serve(CONFIG.port).await {
        log::error!("[API] Server stopped: {e}");
        std::process::exit(1);
    }
}
