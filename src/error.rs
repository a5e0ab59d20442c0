use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Scraping error: {0}")]
    Scraper(#[from] ScraperError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required configuration: {0}")]
    MissingField(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build client: {0}")]
    BuildError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response error {status_code}: {url}")]
    ResponseError { status_code: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Ways the login handshake can stop short of an authenticated session.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login page did not contain an anti-forgery token")]
    TokenMissing,

    #[error("Portal rejected the login with status {status}")]
    Rejected { status: u16 },

    #[error("Login redirect has no usable location: {0}")]
    InvalidRedirect(String),
}

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("No listing row matches class {0:?}")]
    ClassNotFound(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
