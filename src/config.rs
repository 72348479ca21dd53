use std::env;

use dotenv::dotenv;

use crate::error::Error;

pub const BASE_URL_VAR: &str = "CAFE_LIKE_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for the `/api/...` paths, e.g. `http://localhost:5000`.
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the config from the environment, seeding it from a local `.env` file if present.
    pub fn load_env_config() -> Result<Self, Error> {
        if dotenv().is_err() {
            log::debug!("No .env file loaded");
        }
        let base_url = env::var(BASE_URL_VAR).map_err(|_| Error::MissingEnv(BASE_URL_VAR))?;
        Ok(Config::new(base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(
            Config::new("http://localhost:5000/").base_url,
            "http://localhost:5000"
        );
        assert_eq!(Config::new("http://cafes.test").base_url, "http://cafes.test");
    }
}
