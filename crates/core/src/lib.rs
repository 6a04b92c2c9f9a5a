//! Domain logic for the SitePulse dashboard service.
//!
//! Pure, I/O-free building blocks:
//! - [`layout`]: layout decoding, re-encoding, and the disabled-plugin filter
//! - [`dashboard`]: default layout synthesis and display-name generation
//! - [`error`] / [`types`]: shared error and id/timestamp types

pub mod dashboard;
pub mod error;
pub mod layout;
pub mod types;
