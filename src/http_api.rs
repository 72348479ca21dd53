use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::Config;
use crate::error::Error;
use crate::like_api::LikeApi;
use crate::models::{parse_reply, parse_status, CafeRequest, EntityId, LikeStatus};

pub const LIKES_PATH: &str = "/api/likes";
pub const LIKE_PATH: &str = "/api/like";
pub const UNLIKE_PATH: &str = "/api/unlike";

/// `LikeApi` over HTTP. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpLikeApi {
    client: Client,
    base_url: String,
}

impl HttpLikeApi {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        HttpLikeApi {
            client,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_cafe(&self, path: &str, id: &EntityId) -> Result<(), Error> {
        let body = serde_json::to_string(&CafeRequest { cafe_id: id })?;
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let text = response.text().await?;
        let reply = parse_reply(&text)?;
        debug!("POST {path} for cafe {id} replied {reply}");
        Ok(())
    }
}

impl LikeApi for HttpLikeApi {
    async fn status(&self, id: &EntityId) -> Result<LikeStatus, Error> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, LIKES_PATH))
            .query(&[("cafe_id", id.to_string())])
            .send()
            .await?;
        let text = response.text().await?;
        debug!("GET {LIKES_PATH} for cafe {id} replied {text}");
        parse_status(&text)
    }

    async fn like(&self, id: &EntityId) -> Result<(), Error> {
        self.post_cafe(LIKE_PATH, id).await
    }

    async fn unlike(&self, id: &EntityId) -> Result<(), Error> {
        self.post_cafe(UNLIKE_PATH, id).await
    }
}
