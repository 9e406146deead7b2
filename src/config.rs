//! Server Configuration
//!
//! The bind address is resolved from, in order: the `--bind <addr:port>` argument,
//! the `RAG_BIND` environment variable, and finally `0.0.0.0:8000`.

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Environment variable overriding the bind address.
pub const BIND_ENV_VAR: &str = "RAG_BIND";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads the configuration from the process arguments and environment.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::resolve(&args, std::env::var(BIND_ENV_VAR).ok())
    }

    /// Resolves the configuration from explicit inputs. `args[0]` is the program name.
    pub fn resolve(args: &[String], env_bind: Option<String>) -> Result<Self> {
        let mut arg_bind: Option<String> = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args.get(i + 1).context("--bind requires <addr:port>")?;
                    arg_bind = Some(value.clone());
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let raw = arg_bind
            .or(env_bind)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address: {}", raw))?;

        Ok(Self { bind_addr })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_bind_addr() {
        let config = ServerConfig::resolve(&args(&["minimal_rag"]), None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_env_overrides_default() {
        let config =
            ServerConfig::resolve(&args(&["minimal_rag"]), Some("127.0.0.1:9000".into()))
                .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn test_arg_overrides_env() {
        let config = ServerConfig::resolve(
            &args(&["minimal_rag", "--bind", "127.0.0.1:7000"]),
            Some("127.0.0.1:9000".into()),
        )
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:7000");
    }

    #[test]
    fn test_unknown_args_ignored() {
        let config = ServerConfig::resolve(
            &args(&["minimal_rag", "--verbose", "--bind", "127.0.0.1:7001"]),
            None,
        )
        .unwrap();
        assert_eq!(config.bind_addr.port(), 7001);
    }

    #[test]
    fn test_invalid_addr_is_error() {
        let bad_arg = ServerConfig::resolve(&args(&["minimal_rag", "--bind", "nope"]), None);
        assert!(bad_arg.is_err());

        let bad_env = ServerConfig::resolve(&args(&["minimal_rag"]), Some("localhost".into()));
        assert!(bad_env.is_err());
    }

    #[test]
    fn test_missing_bind_value_is_error() {
        assert!(ServerConfig::resolve(&args(&["minimal_rag", "--bind"]), None).is_err());
    }
}
