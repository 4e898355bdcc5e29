//! jurito-client - HTTP integration with the jurito backend.
//!
//! Implements the [`jurito_core::Backend`] trait over reqwest and owns the
//! endpoint configuration. Everything above this crate is network-free.

pub mod config;
pub mod http;

pub use config::BackendConfig;
pub use http::HttpBackend;
