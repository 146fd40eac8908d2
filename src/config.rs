use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Connection settings for the hosted waitlist table. The url and anon key
/// are the two deployment secrets; a missing value is a startup-time
/// misconfiguration, never a request-time error.
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    "waitlist_entries".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl LoggingSettings {
    /// Effective level and format for the tracing subscriber: the bare
    /// LOG_LEVEL / LOG_FORMAT variables win over the config file when set.
    pub fn effective(&self) -> (String, String) {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| self.level.clone());
        let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| self.format.clone());
        (level, format)
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with FLOURISH_)
    /// 4. The bare SUPABASE_URL / SUPABASE_ANON_KEY secrets
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FLOURISH_)
            // e.g., FLOURISH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FLOURISH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_secret_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FLOURISH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the two connection secrets from their conventional variable
/// names, so deployments can keep using plain SUPABASE_URL and
/// SUPABASE_ANON_KEY instead of the FLOURISH_-prefixed forms.
fn apply_secret_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL").ok();
    let supabase_anon_key = env::var("SUPABASE_ANON_KEY").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(anon_key) = supabase_anon_key {
        builder = builder.set_override("supabase.anon_key", anon_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_table_name() {
        assert_eq!(default_table(), "waitlist_entries");
    }

    #[test]
    fn test_effective_logging_env_overrides_config() {
        std::env::remove_var("LOG_LEVEL");
        std::env::remove_var("LOG_FORMAT");
        let logging = LoggingSettings {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(
            logging.effective(),
            ("debug".to_string(), "pretty".to_string())
        );

        std::env::set_var("LOG_LEVEL", "trace");
        assert_eq!(logging.effective().0, "trace");
        std::env::remove_var("LOG_LEVEL");
    }

    #[test]
    fn test_load_from_reads_file_sections() {
        let path = std::env::temp_dir().join("flourish-waitlist-config-test.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9999

[supabase]
url = "https://project.supabase.co"
anon_key = "test_key"

[logging]
level = "debug"
format = "pretty"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.port, 9999);
        assert_eq!(settings.supabase.table, "waitlist_entries");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "pretty");

        std::fs::remove_file(&path).ok();
    }
}
