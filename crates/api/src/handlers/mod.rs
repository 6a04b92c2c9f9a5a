//! HTTP handler implementations, one module per resource.

pub mod client;
pub mod dashboard;
