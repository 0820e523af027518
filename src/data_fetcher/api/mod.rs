pub mod blocking;
pub mod http_client;
pub mod identity;
pub mod urls;
mod client;
mod endpoint_methods;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
pub use identity::AppIdentity;
// Re-export the async client
pub use client::TbaClient;
