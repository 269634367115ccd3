/// Configuration constants for the Cloud Controller API
pub mod api {
    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "/v2/organizations";

    /// Spaces endpoint
    pub const SPACES: &str = "/v2/spaces";

    /// Apps endpoint
    pub const APPS: &str = "/v2/apps";

    /// Service bindings endpoint
    pub const SERVICE_BINDINGS: &str = "/v2/service_bindings";

    /// Audit events endpoint
    pub const EVENTS: &str = "/v2/events";

    /// Connect timeout for API and UAA requests (seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Maximum number of response body bytes kept in error messages
    pub const ERROR_BODY_LIMIT: usize = 1024;

    /// Number of refresh-and-retry cycles allowed per logical request
    pub const MAX_AUTH_RETRIES: u32 = 1;
}

/// Configuration constants for the UAA token endpoint
pub mod uaa {
    /// Token endpoint path, relative to the UAA base URL
    pub const TOKEN_PATH: &str = "/oauth/token";

    /// Prefix stored in front of refreshed access tokens
    pub const TOKEN_TYPE_PREFIX: &str = "bearer";

    /// Client ID used by the cf CLI when none is configured
    pub const DEFAULT_CLIENT_ID: &str = "cf";
}

/// Configuration constants for the cf CLI config file
pub mod cf_config {
    /// Environment variable overriding the cf CLI home directory
    pub const HOME_ENV_VAR: &str = "CF_HOME";

    /// Path to the cf CLI config file, relative to the cf home directory
    pub const FILE_PATH: &str = ".cf/config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
