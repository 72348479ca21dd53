use anyhow::{Context, Result};
use clap::Parser;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::{json, Value};

use cafe_like::{Config, EntityId, LIKES_PATH, LIKE_PATH, UNLIKE_PATH};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the server to check. Defaults to CAFE_LIKE_BASE_URL
    /// Ex: http://localhost:5000
    #[arg(long)]
    base_url: Option<String>,

    /// Cafe id sent with every request. Numbers are sent as JSON numbers, anything else as a string.
    #[arg(long)]
    cafe_id: EntityId,

    /// Also send the like & unlike requests, which change the server's state
    #[arg(long)]
    write: bool,
}

async fn print_reply(label: &str, response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read {label} response text"))?;
    let value: Value = serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse {label} JSON: {body}"))?;

    println!(
        "{label} Response ({status}):\n{}",
        serde_json::to_string_pretty(&value)?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.base_url {
        Some(base_url) => Config::new(base_url),
        None => Config::load_env_config()?,
    };

    let client = Client::new();

    let likes = client
        .get(format!("{}{}", config.base_url, LIKES_PATH))
        .query(&[("cafe_id", args.cafe_id.to_string())])
        .send()
        .await
        .context("Likes request failed")?;
    print_reply("Likes", likes).await?;

    if !args.write {
        return Ok(());
    }

    let body = json!({ "cafe_id": args.cafe_id }).to_string();
    for (label, path) in [("Like", LIKE_PATH), ("Unlike", UNLIKE_PATH)] {
        let response = client
            .post(format!("{}{}", config.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .body(body.clone())
            .send()
            .await
            .with_context(|| format!("{label} request failed"))?;
        print_reply(label, response).await?;
    }

    Ok(())
}
