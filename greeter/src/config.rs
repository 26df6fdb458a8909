use crate::error::{GreeterError, GreeterResult};
use crate::variant::{Variant, DEFAULT_VARIANT};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub greeting: String,
    pub health_route: bool,
    pub banner: String,
}

impl Config {
    /// Settings exactly as the preset defines them
    pub fn from_variant(variant: &Variant) -> Self {
        Self {
            variant: variant.name.to_string(),
            bind_addr: DEFAULT_BIND_ADDR,
            port: variant.default_port,
            greeting: variant.greeting.to_string(),
            health_route: variant.health_route,
            banner: variant.banner.to_string(),
        }
    }

    pub fn from_env() -> GreeterResult<Self> {
        let name = env::var("VARIANT").unwrap_or_else(|_| DEFAULT_VARIANT.to_string());
        let variant = Variant::lookup(&name)?;
        let mut config = Self::from_variant(variant);

        config.port = variant.resolve_port(env::var("PORT").ok().as_deref());

        if let Ok(greeting) = env::var("GREETING") {
            config.greeting = greeting;
        }

        if let Ok(raw) = env::var("HEALTH_ROUTE") {
            config.health_route = parse_flag("HEALTH_ROUTE", &raw)?;
        }

        if let Ok(raw) = env::var("BIND_ADDR") {
            config.bind_addr = raw
                .trim()
                .parse()
                .map_err(|_| GreeterError::InvalidSetting {
                    name: "BIND_ADDR",
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_flag(name: &'static str, raw: &str) -> GreeterResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(GreeterError::InvalidSetting {
            name,
            value: raw.to_string(),
        }),
    }
}
