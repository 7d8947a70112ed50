use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main site configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Template settings
    #[serde(default)]
    pub templates: TemplatesConfig,
    /// Seed fixture settings
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplatesConfig {
    /// Directory the tera template set is loaded from
    #[serde(default = "default_templates_dir")]
    pub dir: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// Optional JSON fixture file loaded into the store at startup
    #[serde(default)]
    pub file: Option<String>,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SERVER__PORT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPES__SERVER__HOST
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The address string the server binds, e.g. "127.0.0.1:8000"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
