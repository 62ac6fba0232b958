use std::path::PathBuf;

use crate::types::{FuzzifierOptions, PartitionNaming};

/// `fuzzify` command settings, read from the environment
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub modalities: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub new_entries: Option<PathBuf>,
    pub interpolated_output: Option<PathBuf>,
    pub plot_dir: Option<PathBuf>,
    pub naming: PartitionNaming,
    pub invert: bool,
    pub log_level: String,
    /// Set when `ENABLE_FILE_LOGS` is on; defaults to `./logs`
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        let path = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        let naming = match std::env::var("FUZZIFY_NAMING").as_deref() {
            Ok("quantity") => PartitionNaming::Quantity,
            _ => PartitionNaming::Quality,
        };

        let invert = std::env::var("FUZZIFY_INVERT")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let file_logs = std::env::var("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let log_dir = file_logs
            .then(|| path("LOG_DIR").unwrap_or_else(|| PathBuf::from("./logs")));

        Self {
            input: path("FUZZIFY_INPUT"),
            modalities: path("FUZZIFY_MODALITIES"),
            output: path("FUZZIFY_OUTPUT"),
            new_entries: path("FUZZIFY_NEW_ENTRIES"),
            interpolated_output: path("FUZZIFY_INTERPOLATED_OUTPUT"),
            plot_dir: path("FUZZIFY_PLOT_DIR"),
            naming,
            invert,
            log_level,
            log_dir,
        }
    }

    /// Positional input path takes precedence over `FUZZIFY_INPUT`.
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Self {
        if let Some(input) = args.into_iter().next() {
            self.input = Some(PathBuf::from(input));
        }
        self
    }

    pub fn fuzzifier_options(&self) -> FuzzifierOptions {
        FuzzifierOptions {
            naming: self.naming,
            invert: self.invert,
        }
    }
}
