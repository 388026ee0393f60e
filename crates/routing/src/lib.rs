//! Routing-service client.
//!
//! Wraps the single outbound distance-matrix call the alert core makes:
//! one origin/destination pair in, a normalized [`DurationResult`] or a
//! typed [`RoutingError`] out.

pub mod client;
pub mod error;
pub mod response;

pub use client::RouteDurationClient;
pub use error::RoutingError;
