//! Runtime configuration.

use lexc_foundation::GENERAL_LECT;

/// Default log filter when neither `--log` nor `LEXC_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "LEXC_LOG";

/// Configuration for a session and its front ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Lect used when none is named.
    pub lect: String,

    /// Sampler seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Overrides the document's case-sensitivity setting.
    pub case_sensitive: Option<bool>,

    /// `tracing` filter directive, e.g. `warn` or `lexc_rules=debug`.
    pub log_filter: String,

    /// Print the REPL welcome banner.
    pub show_banner: bool,

    /// Run the requested actions and exit without a REPL.
    pub batch: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            lect: GENERAL_LECT.to_string(),
            seed: None,
            case_sensitive: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_banner: true,
            batch: false,
        }
    }
}

impl RuntimeConfig {
    /// Non-interactive configuration: no banner, no REPL.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            show_banner: false,
            batch: true,
            ..Self::default()
        }
    }

    /// Reproducible configuration for tests and scripted runs.
    #[must_use]
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::batch()
        }
    }

    /// Builder method to set the default lect.
    #[must_use]
    pub fn with_lect(mut self, lect: impl Into<String>) -> Self {
        self.lect = lect.into();
        self
    }

    /// Builder method to set the sampler seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to override case sensitivity.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable batch mode.
    #[must_use]
    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }
}
