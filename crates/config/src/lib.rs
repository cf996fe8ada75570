use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

mod schema;

pub use schema::{
    AppConfig, CorsConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_ORIGIN, DatabaseConfig,
    Environment, GenerationConfig, OpenAIConfig, ServerConfig,
};

pub const CONFIG_PATH_ENV: &str = "MAGIC_CONFIG";

const API_KEY_ENV: &[&str] = &[
    "MAGIC_OPENAI_API_KEY",
    "OPENAI_API_KEY",
    "NEXT_PUBLIC_CHATGPT_API_KEY",
];
const API_BASE_ENV: &[&str] = &["MAGIC_OPENAI_API_BASE", "OPENAI_API_BASE"];
const MODEL_ENV: &[&str] = &["MAGIC_OPENAI_MODEL", "OPENAI_DEFAULT_MODEL"];
const DATABASE_URL_ENV: &[&str] = &["DATABASE_URL"];
const HOST_ENV: &[&str] = &["HOST"];
const PORT_ENV: &[&str] = &["BACKEND_PORT", "PORT"];
const ENVIRONMENT_ENV: &[&str] = &["APP_ENV", "NODE_ENV"];
const CORS_ORIGINS_ENV: &[&str] = &["MAGIC_CORS_ORIGINS"];
const REFINE_ENV: &[&str] = &["MAGIC_REFINE"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Path of the YAML config file, if `MAGIC_CONFIG` points at one.
pub fn config_path_from_env() -> Option<PathBuf> {
    resolve_env(&[CONFIG_PATH_ENV]).map(PathBuf::from)
}

/// Loads the YAML file (a missing file yields defaults) and then applies
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config_from_file(path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => AppConfig::from_raw(&raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

impl AppConfig {
    pub fn from_raw(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openai.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "openai.model must not be empty".to_string(),
            ));
        }
        for (name, value) in [
            ("generation.temperature", self.generation.temperature),
            (
                "generation.refine_temperature",
                self.generation.refine_temperature,
            ),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be between 0 and 2, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

pub fn apply_env_overrides(config: &mut AppConfig) -> Result<(), ConfigError> {
    if let Some(key) = resolve_env(API_KEY_ENV) {
        config.openai.api_key = Some(SecretString::from(key));
    }
    if let Some(base) = resolve_env(API_BASE_ENV) {
        config.openai.api_base = base;
    }
    if let Some(model) = resolve_env(MODEL_ENV) {
        config.openai.model = model;
    }
    if let Some(url) = resolve_env(DATABASE_URL_ENV) {
        config.database.url = url;
    }
    if let Some(host) = resolve_env(HOST_ENV) {
        config.server.host = host;
    }
    if let Some(port) = resolve_env(PORT_ENV) {
        config.server.port = port
            .parse()
            .map_err(|_| ConfigError::ValidationError(format!("Invalid port: {port}")))?;
    }
    if let Some(environment) = resolve_env(ENVIRONMENT_ENV) {
        match environment.parse() {
            Ok(parsed) => config.environment = parsed,
            Err(_) => tracing::warn!(
                environment = %environment,
                using = %config.environment,
                "Unknown environment, keeping configured value"
            ),
        }
    }
    if let Some(origins) = resolve_env(CORS_ORIGINS_ENV) {
        config.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(refine) = resolve_env(REFINE_ENV) {
        config.generation.refine = parse_bool(&refine).ok_or_else(|| {
            ConfigError::ValidationError(format!("Invalid boolean for MAGIC_REFINE: {refine}"))
        })?;
    }
    Ok(())
}

/// First non-empty value among `names`, in order.
fn resolve_env(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use test_support::TestEnvGuard;

    use super::*;

    fn clear_env(guard: &mut TestEnvGuard) {
        for name in API_KEY_ENV
            .iter()
            .chain(API_BASE_ENV)
            .chain(MODEL_ENV)
            .chain(DATABASE_URL_ENV)
            .chain(HOST_ENV)
            .chain(PORT_ENV)
            .chain(ENVIRONMENT_ENV)
            .chain(CORS_ORIGINS_ENV)
            .chain(REFINE_ENV)
        {
            guard.remove(name);
        }
    }

    #[test]
    fn defaults_match_the_hosted_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.generation.temperature, 0.8);
        assert!(config.generation.refine);
        assert_eq!(config.environment, Environment::Production);
        assert!(config.openai.api_key.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_sections() {
        let config = AppConfig::from_raw(
            "environment: development\nopenai:\n  model: gpt-4o\ngeneration:\n  refine: false\n",
        )
        .unwrap();
        assert!(config.is_development());
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.api_base, DEFAULT_API_BASE);
        assert!(!config.generation.refine);
        assert_eq!(config.generation.temperature, 0.8);
        assert_eq!(config.cors.allowed_origins, vec![DEFAULT_ORIGIN.to_string()]);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            load_config_from_file(Path::new("/definitely/not/here/magic.yaml")).unwrap();
        assert_eq!(config.openai.model, DEFAULT_MODEL);
    }

    #[test]
    fn env_overrides_take_precedence_in_declared_order() {
        let mut guard = TestEnvGuard::new();
        clear_env(&mut guard);
        guard
            .set("OPENAI_API_KEY", "fallback-key")
            .set("MAGIC_OPENAI_API_KEY", "primary-key")
            .set("NODE_ENV", "Development")
            .set("PORT", "8080")
            .set("MAGIC_CORS_ORIGINS", "https://a.example, https://b.example,")
            .set("MAGIC_REFINE", "off");

        let config = load_config(None).unwrap();
        assert_eq!(
            config.openai.api_key.as_ref().map(|k| k.expose_secret()),
            Some("primary-key")
        );
        assert!(config.is_development());
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(!config.generation.refine);
    }

    #[test]
    fn legacy_frontend_key_is_accepted() {
        let mut guard = TestEnvGuard::new();
        clear_env(&mut guard);
        guard.set("NEXT_PUBLIC_CHATGPT_API_KEY", "legacy");

        let config = load_config(None).unwrap();
        assert_eq!(
            config.openai.api_key.as_ref().map(|k| k.expose_secret()),
            Some("legacy")
        );
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut guard = TestEnvGuard::new();
        clear_env(&mut guard);
        guard.set("OPENAI_API_KEY", "   ");

        let config = load_config(None).unwrap();
        assert!(config.openai.api_key.is_none());
    }

    #[test]
    fn invalid_port_is_a_validation_error() {
        let mut guard = TestEnvGuard::new();
        clear_env(&mut guard);
        guard.set("PORT", "eighty");

        let err = load_config(None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unrecognised_node_env_keeps_the_default_environment() {
        let mut guard = TestEnvGuard::new();
        clear_env(&mut guard);
        guard.set("NODE_ENV", "test");

        let config = load_config(None).unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let config = AppConfig::from_raw("generation:\n  temperature: 3.5\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
