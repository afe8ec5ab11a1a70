use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("MOVIEPICK_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            .set_default("logs.level", "info")?
            .set_default("catalog.source", "movies.csv")?
            .set_default("catalog.timeout_secs", 10)?
            .set_default("export.output_dir", ".")?
            .set_default("export.file_name", "selected_movies.txt")?
            .set_default("output.format", "text")?
            // Add in config toml, if present
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment, e.g. MOVIEPICK_CATALOG__SOURCE
            .add_source(
                config::Environment::with_prefix("MOVIEPICK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct Config {
    pub logs: LogsConfig,
    pub catalog: CatalogConfig,
    pub export: ExportConfig,
    pub output: OutputConfig,
}

// ===============================================================================
// Catalog
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct CatalogConfig {
    /// Local CSV path or http(s) URL (e.g. "movies.csv", "https://example.org/movies.csv")
    pub source: String,
    /// Timeout applied to HTTP fetches only.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 10 }

// ===============================================================================
// Export
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct ExportConfig {
    /// Directory the export artifact is written to. Created on first export.
    pub output_dir: String,
    pub file_name: String,
}

// ===============================================================================
// Output
// ===============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct LogsConfig {
    pub level: String,
}
