//! 统一配置中心
//!
//! 提供应用的全局配置管理，包括：
//! - HTTP 服务
//! - RPC 服务
//! - 停机宽限期

use serde::{Deserialize, Serialize};
use std::env;

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// RPC 服务配置
    pub rpc: RpcConfig,
    /// 停机宽限期（秒）
    pub shutdown_grace_secs: u64,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// RPC 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// 从环境变量加载配置，缺省值适用于本地开发
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig {
                host: env::var("HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("HTTP_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
            },
            rpc: RpcConfig {
                host: env::var("RPC_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("RPC_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(50054),
            },
            shutdown_grace_secs: env::var("SHUTDOWN_GRACE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidServerConfig(
                "HTTP port must be greater than 0".to_string(),
            ));
        }
        if self.rpc.port == 0 {
            return Err(ConfigError::InvalidServerConfig(
                "RPC port must be greater than 0".to_string(),
            ));
        }
        if self.http.host == self.rpc.host && self.http.port == self.rpc.port {
            return Err(ConfigError::InvalidServerConfig(
                "HTTP and RPC servers cannot share the same address".to_string(),
            ));
        }
        if self.shutdown_grace_secs == 0 {
            return Err(ConfigError::InvalidServerConfig(
                "shutdown grace period must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// HTTP 监听地址
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }

    /// RPC 监听地址
    pub fn rpc_addr(&self) -> String {
        format!("{}:{}", self.rpc.host, self.rpc.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server configuration: {0}")]
    InvalidServerConfig(String),
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_env();
        assert!(!config.http.host.is_empty());
        assert!(config.http.port > 0);
        assert!(config.rpc.port > 0);
        assert!(config.shutdown_grace_secs > 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_shared_address() {
        let mut config = AppConfig::from_env();
        config.rpc.host = config.http.host.clone();
        config.rpc.port = config.http.port;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let mut config = AppConfig::from_env();
        config.http.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_addresses() {
        let config = AppConfig {
            http: HttpConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            rpc: RpcConfig {
                host: "0.0.0.0".to_string(),
                port: 50054,
            },
            shutdown_grace_secs: 30,
        };
        assert_eq!(config.http_addr(), "0.0.0.0:8080");
        assert_eq!(config.rpc_addr(), "0.0.0.0:50054");
    }
}
