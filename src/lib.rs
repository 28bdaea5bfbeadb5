//! Client for the Business Elements multi-tenant REST API.
//!
//! The API is exposed as a graph of accessors rooted at a [`Client`]:
//! pick a [`Tenant`], then drill down (`projects()`, `project(id)`,
//! `instances()`, ...) to the resource you want and call an operation on it.
//! Each operation validates its arguments, builds a [`RequestDescriptor`]
//! and hands it to the configured [`Execute`] implementation.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod transport;

pub use api::{Endpoint, RequestDescriptor, RequestOptions};
pub use client::Client;
pub use error::{Error, Result};
pub use resource::Tenant;
pub use transport::{ApiResponse, AuthState, Execute, HttpExecutor, Session};
