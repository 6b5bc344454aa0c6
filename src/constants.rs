//! Application constants
//!
//! Centralized location for fixed labels, targets and configuration defaults.

/// Application name
pub const APP_NAME: &str = "tickfetch";

/// Fixed label shown at the top of the view
pub const GREETING: &str = "Hello";

/// Target set by the first control
pub const JACK_TARGET: &str = "/jack.json";

/// Target set by the second control
pub const SALLY_TARGET: &str = "/sally.json";

/// Default tick period in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default directory that targets are resolved against
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Log file written next to the working directory
pub const LOG_FILE: &str = "tickfetch.log";

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "TICKFETCH_CONFIG";
