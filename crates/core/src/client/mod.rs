//! Client module - the request/response contract of the mock API and a typed
//! HTTP client for it.

mod client_model;
mod http_client;

pub use client_model::{ErrorBody, HealthStatus, LoginRequest, LoginResponse};
pub use http_client::HttpDealDeskClient;
