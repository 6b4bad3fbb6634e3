use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use repository::Repository;
use tokio::net::TcpListener;
use toml::{map::Map, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "password";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_name = std::env::var("KIOSK_CONFIG")
        .unwrap_or_else(|_| "Config.toml".to_string());
    let config = util::load_config(&config_name)?;
    let secrets = util::load_env("Secrets.toml")?;

    let db_url = util::get_str(&config, "database", "url")?;
    let port = util::get_integer(&config, "server", "port")?;
    let port = u16::try_from(port).context("server.port is out of range")?;

    let repository = Repository::new(db_url)
        .await
        .context("failed to initialize repository")?;

    let (username, password) = admin_credentials(secrets.as_ref());
    if repository.admin.ensure_seeded(&username, &password).await? {
        info!(task = "seed admin", username = username);
    }

    let router = api::serve(repository, api::init_config(&config)?).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "listen", address = %address);

    Ok(axum::serve(listener, router).await?)
}

fn admin_credentials(secrets: Option<&Map<String, Value>>) -> (String, String) {
    let get = |key: &str| {
        secrets
            .and_then(|secrets| secrets.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    match (get("ADMIN_USERNAME"), get("ADMIN_PASSWORD")) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            warn!(
                task = "seed admin",
                "admin credentials not set in Secrets.toml, using defaults"
            );
            (
                DEFAULT_ADMIN_USERNAME.to_string(),
                DEFAULT_ADMIN_PASSWORD.to_string(),
            )
        }
    }
}
