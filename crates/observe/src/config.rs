use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Config {
    /// Filters spans and events based on a set of filter directives
    /// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
    pub(crate) env_filter: String,
    /// Least severe level that still gets written to stderr. Everything more
    /// verbose goes to stdout.
    pub(crate) stderr_threshold: LevelFilter,
    /// Output log events as JSON
    pub(crate) use_json_format: bool,
}

impl Config {
    pub fn new(env_filter: &str, stderr_threshold: LevelFilter, use_json_format: bool) -> Self {
        Self {
            env_filter: env_filter.into(),
            stderr_threshold,
            use_json_format,
        }
    }

    pub fn with_env_filter(mut self, env_filter: &str) -> Self {
        self.env_filter = env_filter.to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_filter: "info".to_string(),
            stderr_threshold: LevelFilter::ERROR,
            use_json_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_override_keeps_other_settings() {
        let config = Config::new("info", LevelFilter::WARN, true)
            .with_env_filter("warn,deploy_contracts=debug");

        assert_eq!(config.env_filter, "warn,deploy_contracts=debug");
        assert_eq!(config.stderr_threshold, LevelFilter::WARN);
        assert!(config.use_json_format);
    }

    #[test]
    fn default_writes_only_errors_to_stderr() {
        let config = Config::default();
        assert_eq!(config.env_filter, "info");
        assert_eq!(config.stderr_threshold, LevelFilter::ERROR);
        assert!(!config.use_json_format);
    }
}
