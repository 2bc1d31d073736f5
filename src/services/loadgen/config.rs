use std::env;

/// Load generator configuration
/// Loads target and fan-out settings from environment variables
pub struct LoadConfig {
    pub base_url: String,
    pub clients_per_url: usize,
}

impl LoadConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let clients_per_url = match env::var("LOAD_CLIENTS_PER_URL") {
            Ok(value) => value
                .parse()
                .map_err(|_| "LOAD_CLIENTS_PER_URL must be a positive integer".to_string())?,
            Err(_) => 10,
        };

        Ok(Self {
            base_url,
            clients_per_url,
        })
    }
}
