mod client;
mod endpoint;

pub use client::{ApiClient, ApiConfig, ResponseEnvelope, Transport};
pub use endpoint::Endpoint;
