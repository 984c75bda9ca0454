use historical_events_api::config::{load_dotenv, Settings};
use historical_events_api::logging::init_tracing;
use historical_events_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let settings = Settings::from_env();
    server::serve(settings).await
}
