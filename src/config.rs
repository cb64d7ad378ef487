use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub database_name: String,
    pub port: u16,
    pub access_token_secret: String,
    pub payment_secret_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mongodb_uri: env::var("MONGODB_URI").context("MONGODB_URI must be set")?,
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "vharaBari".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            access_token_secret: env::var("ACCESS_TOKEN_SECRET")
                .context("ACCESS_TOKEN_SECRET must be set")?,
            payment_secret_key: env::var("PAYMENT_SECRET_KEY")
                .context("PAYMENT_SECRET_KEY must be set")?,
        })
    }
}
