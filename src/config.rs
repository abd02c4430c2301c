//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
//! The Upstash credentials are optional: when either is missing, rate
//! limiting is disabled and every request is allowed through.
use std::env;
use dotenv;

#[derive(Clone)]
pub struct Config {
    pub replicate_api_key: String,
    pub replicate_api_url: String,
    pub upstash_rest_url: Option<String>,
    pub upstash_rest_token: Option<String>,
    pub rate_limit_capacity: u64,
    pub rate_limit_window_minutes: u64,
    pub poll_interval_ms: u64,
    pub poll_max_wait_secs: u64,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            replicate_api_key: env::var("REPLICATE_API_KEY").unwrap_or_else(|_| String::new()),
            replicate_api_url: env::var("REPLICATE_API_URL")
                .unwrap_or_else(|_| "https://api.replicate.com".to_string()),
            upstash_rest_url: env::var("UPSTASH_REDIS_REST_URL").ok(),
            upstash_rest_token: env::var("UPSTASH_REDIS_REST_TOKEN").ok(),
            rate_limit_capacity: parse_or("RATE_LIMIT_CAPACITY", 5),
            rate_limit_window_minutes: parse_or("RATE_LIMIT_WINDOW_MINUTES", 1440),
            poll_interval_ms: parse_or("POLL_INTERVAL_MS", 1000),
            poll_max_wait_secs: parse_or("POLL_MAX_WAIT_SECS", 300),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8190".to_string()),
        })
    }

    pub fn print_env_vars() {
        println!("REPLICATE_API_KEY: {}", set_or_unset("REPLICATE_API_KEY"));
        println!("REPLICATE_API_URL: {}", env::var("REPLICATE_API_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("UPSTASH_REDIS_REST_URL: {}", env::var("UPSTASH_REDIS_REST_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("UPSTASH_REDIS_REST_TOKEN: {}", set_or_unset("UPSTASH_REDIS_REST_TOKEN"));
        println!("RATE_LIMIT_CAPACITY: {}", env::var("RATE_LIMIT_CAPACITY").unwrap_or_else(|_| "<unset>".to_string()));
        println!("RATE_LIMIT_WINDOW_MINUTES: {}", env::var("RATE_LIMIT_WINDOW_MINUTES").unwrap_or_else(|_| "<unset>".to_string()));
        println!("POLL_INTERVAL_MS: {}", env::var("POLL_INTERVAL_MS").unwrap_or_else(|_| "<unset>".to_string()));
        println!("POLL_MAX_WAIT_SECS: {}", env::var("POLL_MAX_WAIT_SECS").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}

fn parse_or(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn set_or_unset(key: &str) -> &'static str {
    if env::var(key).is_ok() { "<set>" } else { "<unset>" }
}
