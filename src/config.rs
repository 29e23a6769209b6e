use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_BACKEND_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(|env| env.trim().to_lowercase())
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL base de la API (sin barra final)
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_local_api() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config.backend_url(), "http://127.0.0.1:5000");
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), None, None);
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn logging_can_be_disabled() {
        let config = AppConfig::from_values(None, Some("Production"), Some("false"));
        assert_eq!(config.environment, "production");
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn garbage_logging_flag_keeps_default() {
        let config = AppConfig::from_values(Some("   "), None, Some("quizas"));
        assert_eq!(config.backend_url(), "http://127.0.0.1:5000");
        assert!(config.enable_logging);
    }
}
