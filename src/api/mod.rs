//! Request construction layer
//!
//! Everything here is pure and synchronous: resolving endpoint paths,
//! building request descriptors and normalising embedded collections.
//!
//! # Module Structure
//!
//! - [`endpoint`] - Endpoint table and path resolution
//! - [`descriptor`] - Request descriptors and caller options
//! - [`requests`] - Validating builders for mutating operations
//! - [`embedded`] - Embedded collection unwrapping

pub mod descriptor;
pub mod embedded;
pub mod endpoint;
pub mod requests;

pub use descriptor::{RequestDescriptor, RequestOptions};
pub use embedded::{embedded_items, relation};
pub use endpoint::Endpoint;
