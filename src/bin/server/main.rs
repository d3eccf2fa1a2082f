use devicemanager::config::Config;
use devicemanager::domain::brand::service::Service as BrandService;
use devicemanager::domain::device::service::Service as DeviceService;
use devicemanager::inbound::http::{HttpServer, HttpServerConfig};
use devicemanager::outbound::sqlite::Sqlite;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing();

    let sqlite = Sqlite::new(&config.database_url).await?;
    let brand_service = BrandService::new(sqlite.clone());
    let device_service = DeviceService::new(sqlite);

    let server_config = HttpServerConfig {
        port: &config.server_port,
    };

    let http_server = HttpServer::new(brand_service, device_service, server_config).await?;

    http_server.run().await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
