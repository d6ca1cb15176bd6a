//! Server configuration from command-line flags and the environment.
//!
//! Requires the `server` feature. Flags win over environment variables,
//! which win over the defaults. A `.env` file in the working directory is
//! read first, when present.

use clap::Parser;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=warn";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bookshelf")]
#[command(about = "In-memory book catalog served over HTTP")]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "BOOKSHELF_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BOOKSHELF_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// tracing filter used when RUST_LOG is not set
    #[arg(long, env = "BOOKSHELF_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl ServerConfig {
    /// Load `.env` (if any) and parse the process arguments.
    ///
    /// Returns whether a `.env` file was loaded. A missing file is not an
    /// error; an unreadable or malformed one is.
    pub fn load() -> Result<(Self, bool), dotenvy::Error> {
        let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            other => Err(other),
        })?;
        Ok((Self::parse(), env_file_loaded))
    }

    /// `host:port`, ready for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
