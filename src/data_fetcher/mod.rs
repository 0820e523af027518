pub mod api;
pub mod cache;

pub use api::{AppIdentity, Endpoint, TbaClient, blocking};
pub use cache::ResponseCache;
