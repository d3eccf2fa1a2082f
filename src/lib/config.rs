use anyhow::Context;
use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub database_url: String,
}

impl Config {
    /// Reads the configuration from the environment. A `.env` file in the working directory is
    /// loaded first when present.
    pub fn from_env() -> anyhow::Result<Config> {
        if let Err(e) = dotenv() {
            if !e.not_found() {
                return Err(e).context("failed to load .env file");
            }
        }

        let server_port = load_env("SERVER_PORT")?;
        let database_url = load_env("DATABASE_URL")?;

        Ok(Config {
            server_port,
            database_url,
        })
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_env_missing_key() {
        let err = load_env("DEVICEMANAGER_SURELY_UNSET_KEY").unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to load environment variable DEVICEMANAGER_SURELY_UNSET_KEY"
        );
    }
}
