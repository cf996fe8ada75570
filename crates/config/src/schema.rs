use secrecy::SecretString;
use serde::Deserialize;
use strum_macros::{Display, EnumString};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com";
pub const DEFAULT_ORIGIN: &str = "https://ai-component-generator.vercel.app";

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
    pub generation: GenerationConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Clone, Copy, Debug, Deserialize, Default, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    // 0 lets the OS pick a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: String::from("127.0.0.1"),
            port: 3001,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OpenAIConfig {
    // Only read from the environment so it never lands in a config file
    #[serde(skip)]
    pub api_key: Option<SecretString>,
    pub api_base: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        OpenAIConfig {
            api_key: None,
            api_base: String::from(DEFAULT_API_BASE),
            model: String::from(DEFAULT_MODEL),
            timeout_secs: 60,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub temperature: f32,
    // Whether to run the self-critique pass after the first completion
    pub refine: bool,
    pub refine_temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            temperature: 0.8,
            refine: true,
            refine_temperature: 0.2,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: String::from("sqlite://magic.sqlite?mode=rwc"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    // Origins allowed outside development; development allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origins: vec![String::from(DEFAULT_ORIGIN)],
        }
    }
}
