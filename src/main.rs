use tracing_subscriber::EnvFilter;

use vitrine::core::settings::Settings;
use vitrine::server::start_server;

const SETTINGS_PATH: &str = "settings.json";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load(SETTINGS_PATH)?;
    start_server(settings).await
}
