//! Pagination windows for the grant portals.
//!
//! [`pagination::build`] is the pure core; [`links`] and [`query`] adapt it to
//! query strings, and [`routes`] exposes it over HTTP.

pub mod config;
pub mod error;
pub mod links;
pub mod pagination;
pub mod query;
pub mod routes;

pub use pagination::{build, PageDescriptor, PaginationError, PaginationRequest, PaginationResult};
pub use routes::create_routes;
