use std::net::SocketAddr;
use std::str::FromStr;

use announce_api::HandlerConfig;
use announce_api::config::TABLE_NAME_ENV;

use crate::errors::GatewayError;
use crate::throttle::RateLimit;

pub const API_KEY_ENV: &str = "GATEWAY_API_KEY";
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
pub const STORE_ENV: &str = "STORE";
pub const POST_RATE_ENV: &str = "POST_RATE_LIMIT";
pub const GET_RATE_ENV: &str = "GET_RATE_LIMIT";
pub const BURST_ENV: &str = "BURST_LIMIT";

/// Shortest API key the managed gateway accepts.
pub const MIN_API_KEY_LENGTH: usize = 20;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_POST_RATE: f64 = 5.0;
const DEFAULT_GET_RATE: f64 = 10.0;
const DEFAULT_BURST: u32 = 2;

/// Table name reported when no DynamoDB table is involved.
const MEMORY_TABLE_NAME: &str = "in-memory";

/// Which store backs the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    DynamoDb,
}

impl FromStr for StoreKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "dynamodb" => Ok(Self::DynamoDb),
            _ => Err(GatewayError::InvalidSetting {
                name: STORE_ENV,
                value: s.to_string(),
                reason: "expected \"memory\" or \"dynamodb\"",
            }),
        }
    }
}

/// Local gateway settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub api_key: String,
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
    pub post_limit: RateLimit,
    pub get_limit: RateLimit,
    /// Passed through to the announcement handler.
    pub handler: HandlerConfig,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = lookup(API_KEY_ENV).ok_or(GatewayError::InvalidSetting {
            name: API_KEY_ENV,
            value: String::new(),
            reason: "an API key is required",
        })?;
        if api_key.len() < MIN_API_KEY_LENGTH {
            return Err(GatewayError::InvalidSetting {
                name: API_KEY_ENV,
                value: "<redacted>".to_string(),
                reason: "must be at least 20 characters",
            });
        }

        let bind_addr_raw = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| GatewayError::InvalidSetting {
                name: BIND_ADDR_ENV,
                value: bind_addr_raw.clone(),
                reason: "expected host:port",
            })?;

        let store = match lookup(STORE_ENV) {
            Some(v) => v.parse()?,
            None => StoreKind::Memory,
        };

        let burst = parse_or(&lookup, BURST_ENV, DEFAULT_BURST)?;
        if burst == 0 {
            return Err(GatewayError::InvalidSetting {
                name: BURST_ENV,
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        let post_limit = RateLimit {
            rate_per_sec: parse_rate(&lookup, POST_RATE_ENV, DEFAULT_POST_RATE)?,
            burst,
        };
        let get_limit = RateLimit {
            rate_per_sec: parse_rate(&lookup, GET_RATE_ENV, DEFAULT_GET_RATE)?,
            burst,
        };

        // The in-memory store has no table, so TABLE_NAME is only required
        // when DynamoDB backs the handler.
        let handler = HandlerConfig::from_lookup(|name| match (store, name) {
            (StoreKind::Memory, TABLE_NAME_ENV) => {
                Some(lookup(name).unwrap_or_else(|| MEMORY_TABLE_NAME.to_string()))
            }
            _ => lookup(name),
        })?;

        Ok(Self {
            api_key,
            bind_addr,
            store,
            post_limit,
            get_limit,
            handler,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, GatewayError> {
    match lookup(name) {
        Some(v) => v.trim().parse().map_err(|_| GatewayError::InvalidSetting {
            name,
            value: v,
            reason: "not a number",
        }),
        None => Ok(default),
    }
}

fn parse_rate(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: f64,
) -> Result<f64, GatewayError> {
    let rate: f64 = parse_or(lookup, name, default)?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(GatewayError::InvalidSetting {
            name,
            value: rate.to_string(),
            reason: "must be a positive number of requests per second",
        });
    }
    Ok(rate)
}
