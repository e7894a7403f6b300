//! Application constants
//!
//! Route paths and configuration defaults used across the workspace.

// Routes served by the local server
pub const LOGIN_PATH: &str = "/login";
pub const CALLBACK_PATH: &str = "/oauth2/callback";
pub const WELCOME_PATH: &str = "/welcome";

// Query parameter carrying the token from the callback to /welcome
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

// Server defaults
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";
pub const DEFAULT_STATIC_DIR: &str = "./web";
pub const DEFAULT_BROWSER_DELAY_MS: u64 = 1000;

// GitHub provider defaults
pub const GITHUB_PROVIDER: &str = "github";
pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_SCOPE: &str = "user";
pub const DEFAULT_USER_AGENT: &str = concat!("authflow/", env!("CARGO_PKG_VERSION"));
