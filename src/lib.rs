//! Vinyl Collection Backend Library
//!
//! This library provides a small HTTP backend that proxies album search to the
//! Spotify Web API and keeps a personal album collection for every caller. The
//! caller's bearer token identifies the collection and is forwarded to Spotify
//! as the upstream credential.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for collection, search and the login flow
//! - `config` - Configuration management and environment variables
//! - `management` - Collection store, enrichment and search annotation
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use vinylcrate::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> vinylcrate::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(&config::server_addr()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the startup plumbing (configuration loading, binding the listener)
/// where any error is fatal and only needs to be reported. Request handling
/// uses the typed errors in [`api::ApiError`], [`spotify::CatalogError`] and
/// [`management::StoreError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable startup failures. Request handlers must never
/// call it, they map failures to HTTP responses instead.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}", addr);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed enrichment call that fell
/// back to the submitted album data.
///
/// # Example
///
/// ```
/// warning!("Album lookup failed, storing basic info. Err: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
