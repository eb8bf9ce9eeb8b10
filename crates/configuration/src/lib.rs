use crate::error::ConfigError;
use std::path::{Path, PathBuf};

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{
    Config, DEFAULT_FEEDS, DisplayConfig, LlmConfig, LoggingConfig, NewsConfig, ReportConfig,
};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `FUNDLENS__LLM__API_KEY`.
pub const ENV_PREFIX: &str = "FUNDLENS";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, then the TOML
/// file, then `FUNDLENS__<SECTION>__<KEY>` environment variables. When `path`
/// is `None` the default `config.toml` is optional; an explicit path must
/// exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_env(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("news.feeds")
}

fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Config, ConfigError> {
    let file = match path {
        Some(p) => config::File::from(p.to_path_buf()).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(
        feeds = config.news.feeds.len(),
        model = %config.llm.model,
        dark_mode = config.display.dark_mode,
        "Configuration loaded"
    );
    Ok(config)
}

/// Rejects configurations the pipeline cannot run with.
///
/// A missing API key is not checked here: commands that never call the model
/// (such as listing funds) should still work without one.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.news.feeds.iter().all(|f| f.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "news.feeds must contain at least one feed URL".to_string(),
        ));
    }
    if config.news.max_prompt_articles == 0 {
        return Err(ConfigError::ValidationError(
            "news.max_prompt_articles must be at least 1".to_string(),
        ));
    }
    if config.news.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "news.request_timeout_secs must be greater than 0".to_string(),
        ));
    }
    if config.llm.model.trim().is_empty() {
        return Err(ConfigError::ValidationError("llm.model must not be empty".to_string()));
    }
    Ok(())
}

/// Command-line switches that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct Overrides {
    /// Path to a TOML configuration file.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub config: Option<PathBuf>,

    /// Render charts and reports with the dark theme.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub dark: bool,

    /// Directory reports are written to.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub output_dir: Option<PathBuf>,
}

impl Overrides {
    /// Loads the configuration and applies these overrides on top.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = load_config(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if self.dark {
            config.display.dark_mode = true;
        }
        if let Some(dir) = &self.output_dir {
            config.report.output_dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Period;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_any_source() {
        let config = load_with_env(None, env_from(&[])).unwrap();
        assert_eq!(config.news.feeds.len(), DEFAULT_FEEDS.len());
        assert_eq!(config.news.max_prompt_articles, 5);
        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert!(!config.display.dark_mode);
        assert_eq!(config.display.period(), Period::OneMonth);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
            [news]
            feeds = ["https://example.com/rss"]
            max_prompt_articles = 3

            [display]
            dark_mode = true
            default_period = "6mo"
            "#,
        );
        let config = load_with_env(Some(file.path()), env_from(&[])).unwrap();
        assert_eq!(config.news.feeds, vec!["https://example.com/rss"]);
        assert_eq!(config.news.max_prompt_articles, 3);
        // Untouched keys in a present section keep their defaults.
        assert_eq!(config.news.request_timeout_secs, 30);
        assert!(config.display.dark_mode);
        assert_eq!(config.display.period(), Period::SixMonths);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = write_config("[llm]\nmodel = \"from-file\"\n");
        let env = env_from(&[
            ("FUNDLENS__LLM__MODEL", "from-env"),
            ("FUNDLENS__LLM__API_KEY", "secret"),
            ("FUNDLENS__NEWS__FEEDS", "https://a.example/rss,https://b.example/rss"),
        ]);
        let config = load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(config.llm.model, "from-env");
        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(config.news.feeds.len(), 2);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/fundlens.toml");
        assert!(matches!(
            load_with_env(Some(missing), env_from(&[])),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_prompt_articles() {
        let file = write_config("[news]\nmax_prompt_articles = 0\n");
        assert!(matches!(
            load_with_env(Some(file.path()), env_from(&[])),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_feed_list() {
        let mut config = Config::default();
        config.news.feeds.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let overrides = Overrides {
            config: None,
            dark: true,
            output_dir: Some(PathBuf::from("/tmp/out")),
        };
        overrides.apply(&mut config);
        assert!(config.display.dark_mode);
        assert_eq!(config.report.output_dir, PathBuf::from("/tmp/out"));
    }
}
