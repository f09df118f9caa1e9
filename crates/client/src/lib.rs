//! `solobill-client`
//!
//! **Responsibility:** talk to the point-of-sale REST backend.
//!
//! This crate provides:
//! - `ItemCatalogApi` / `SalesApi`: the collaborator contracts the workflow
//!   depends on
//! - `HttpBackend`: a `reqwest` implementation of both
//! - `ClientConfig`: base URL, optional bearer token and timeout from the
//!   environment
//!
//! The server is the authority for every record; this crate never caches.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{ItemCatalogApi, SalesApi};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpBackend;
