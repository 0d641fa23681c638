use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for an update or manifest run.
///
/// Every field has a default, so an empty environment yields a config that
/// points at the live SafeAirspace site and the public geo-countries dataset.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Page carrying the embedded `<Country>Warning = '...'` literals.
    pub feed_url: String,
    /// Root under which per-country detail pages live (`{base}/{slug}/`).
    pub detail_base_url: String,
    pub boundaries_url: String,
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    /// Public URL prefix the manifest uses for each listed file.
    pub manifest_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Number of detail pages fetched together before awaiting the batch.
    pub notice_batch_size: usize,
}

impl AppConfig {
    /// Path of the generated warnings document inside [`Self::output_dir`].
    #[must_use]
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(crate::config::OUTPUT_FILE_NAME)
    }
}
