use std::env;
use std::net::SocketAddr;

/// Environment configuration
/// Loads and validates environment variables
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| format!("invalid LISTEN_ADDR: {listen_addr}"))?;

        Ok(Self { listen_addr })
    }
}
