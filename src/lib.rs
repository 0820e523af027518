//! The Blue Alliance API client library
//!
//! Bindings for the v2 REST API of The Blue Alliance, a FIRST Robotics
//! Competition data service. Each endpoint has a method that builds the
//! resource URL, fetches it with the caller's identification header and returns
//! the parsed JSON. Successful responses are cached per client, keyed by URL,
//! for the lifetime of the client.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tba_api::{AppError, TbaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = TbaClient::new("frc3128", "scouting-app", "1.0")?;
//!
//!     let team = client.get_team("frc3128").await?;
//!     println!("Rookie year: {}", team["rookie_year"]);
//!
//!     // Served from the cache, no second request
//!     let again = client.get_team("frc3128").await?;
//!     assert_eq!(team, again);
//!
//!     Ok(())
//! }
//! ```
//!
//! A blocking client with the same methods lives in [`blocking`].

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::blocking;
pub use data_fetcher::{AppIdentity, Endpoint, ResponseCache, TbaClient};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
