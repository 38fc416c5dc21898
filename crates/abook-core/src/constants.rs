/// Application name, used for the config file and environment prefix
pub const APP_NAME: &str = "abook";

/// Optional TOML config file read from the working directory
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// Prefix of environment variables that override settings (`ABOOK__VCARD__VERSION`)
pub const ENV_PREFIX: &str = "ABOOK";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Prefix marking vendor extension fields
pub const CUSTOM_PREFIX: &str = "X-";

/// Default nesting limit for embedded AGENT cards
pub const DEFAULT_MAX_AGENT_DEPTH: usize = 8;
