//! Central constants for the ghdigest application

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "ghdigest.yaml";
}

/// Environment variables read by the CLI
pub mod env {
    /// Personal access token used when `--token` is not given
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
}

/// Default values for diagnostics
pub mod logging {
    /// Filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with `--verbose`
    pub const VERBOSE_FILTER: &str = "ghdigest=debug,ghdigest_github=debug";
}
