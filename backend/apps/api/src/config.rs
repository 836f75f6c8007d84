//! Server configuration loaded from the environment

use anyhow::Context;
use axum::http::HeaderValue;
use quiz::QuizConfig;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process-level settings for the API binary
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `None` selects the in-memory store
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub quiz: QuizConfig,
}

impl ServerConfig {
    /// Read settings from environment variables, falling back to defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw:?}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr:?}"))?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let quiz = if parse_flag(env::var("ANSWER_CASE_SENSITIVE").ok().as_deref()) {
            QuizConfig::case_sensitive()
        } else {
            QuizConfig::default()
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            quiz,
        })
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
