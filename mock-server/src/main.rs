use mock_server::Credentials;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let defaults = Credentials::default();
    let credentials = Credentials {
        client_key: std::env::var("CHECKERS_CLIENT_KEY").unwrap_or(defaults.client_key),
        client_secret: std::env::var("CHECKERS_CLIENT_SECRET").unwrap_or(defaults.client_secret),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    mock_server::run(listener, credentials).await
}
