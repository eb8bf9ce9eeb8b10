use core_types::Period;
use serde::Deserialize;
use std::path::PathBuf;

/// The RSS feeds scanned for fund headlines when none are configured.
pub const DEFAULT_FEEDS: [&str; 14] = [
    "https://finance.yahoo.com/rss/topstories",
    "https://www.moneycontrol.com/rss/MCtopnews.xml",
    "https://www.livemint.com/rss/markets",
    "https://economictimes.indiatimes.com/markets/rssfeeds/1977021501.cms",
    "https://feeds.feedburner.com/euronews/en/home",
    "https://www.politico.eu/rss/politics/",
    "https://europeannewsroom.com/feed",
    "https://www.france24.com/en/europe/rss",
    "https://euobserver.com/rss",
    "http://rss.cnn.com/rss/cnn_topstories.rss",
    "https://rss.nytimes.com/services/xml/rss/nyt/US.xml",
    "https://www.npr.org/rss/rss.php?id=1001",
    "http://feeds.reuters.com/Reuters/domesticNews",
    "https://www.cbsnews.com/latest/rss/main",
];

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an empty `config.toml` (or none at all)
/// yields a working configuration apart from the model API key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub news: NewsConfig,
    pub llm: LlmConfig,
    pub display: DisplayConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Where headlines come from and how many are quoted to the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub feeds: Vec<String>,
    /// Upper bound on articles included in a single prompt.
    pub max_prompt_articles: usize,
    /// Applies to every outbound HTTP request (feeds and model).
    pub request_timeout_secs: u64,
}

/// Settings for the generative-text service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Usually supplied through `FUNDLENS__LLM__API_KEY` rather than the file.
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub dark_mode: bool,
    /// Horizon label used when the CLI does not pass one (e.g. "3mo").
    pub default_period: String,
}

impl DisplayConfig {
    pub fn period(&self) -> Period {
        Period::from_label(&self.default_period)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    /// Also write the raw snapshot next to the HTML report.
    pub export_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file here.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// This allows a user to omit any section from their toml
// and still have it work with sensible defaults.

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            max_prompt_articles: 5,
            request_timeout_secs: 30,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-pro".to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            default_period: Period::OneMonth.label().to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            export_json: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
