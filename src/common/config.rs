// src/common/config.rs
//! Runtime configuration loaded from the environment (and `.env`)
//! with a few command-line overrides for local runs

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed_products: bool,
    pub session_ttl_minutes: i64,
    pub session_cookie_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            seed_products: true,
            session_ttl_minutes: 60,
            session_cookie_secure: false,
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST")
            .ok()
            .and_then(|h| h.trim().parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let session_ttl_minutes = env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|m| m.trim().parse::<i64>().ok())
            .filter(|m| *m > 0)
            .unwrap_or(defaults.session_ttl_minutes);

        Self {
            host,
            port,
            seed_products: env_flag("SEED_PRODUCTS", defaults.seed_products),
            session_ttl_minutes,
            session_cookie_secure: env_flag(
                "SESSION_COOKIE_SECURE",
                defaults.session_cookie_secure,
            ),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Apply `--port <n>`, `--seed` and `--no-seed` from the given arguments
    pub fn apply_cli_overrides<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--port" => {
                    if let Some(port) = args.next().and_then(|p| p.parse::<u16>().ok()) {
                        println!("🔧 CLI override: PORT = {}", port);
                        self.port = port;
                    }
                }
                "--seed" => self.seed_products = true,
                "--no-seed" => {
                    println!("🔧 CLI override: SEED_PRODUCTS = false");
                    self.seed_products = false;
                }
                _ => {}
            }
        }
        self
    }
}

/// Print the effective configuration on startup
pub fn print_config_status(config: &AppConfig) {
    println!("📦 Product inventory form");
    println!("   Address: {}", config.socket_addr());
    println!(
        "   Seed products: {}",
        if config.seed_products { "Yes" } else { "No" }
    );
    println!("   Session TTL: {} min", config.session_ttl_minutes);
    if !config.session_cookie_secure {
        println!("   ⚠️  Session cookie sent without Secure flag");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert!(config.seed_products);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_cli_overrides() {
        let config =
            AppConfig::default().apply_cli_overrides(args(&["inventory", "--port", "9000", "--no-seed"]));
        assert_eq!(config.port, 9000);
        assert!(!config.seed_products);
    }

    #[test]
    fn test_cli_override_ignores_bad_port() {
        let config = AppConfig::default().apply_cli_overrides(args(&["--port", "http"]));
        assert_eq!(config.port, 8080);
    }

    // from_env reads process-wide state; parallel tests would race on it,
    // so only the pure parts are covered here.
}
