pub mod http_response_cache;

// Re-export the response cache
pub use http_response_cache::*;
