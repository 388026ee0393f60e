//! Routing failure taxonomy.
//!
//! Every variant is scoped to the single watch being evaluated; none of
//! them aborts the surrounding tick.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    /// Transport failure: connection refused, DNS, timeout.
    #[error("routing service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-200 status.
    #[error("routing service returned HTTP {0}")]
    Status(u16),

    /// The body decoded, but `rows[0].elements[0].duration.value` is absent,
    /// or the body did not decode at all.
    #[error("malformed routing response: {0}")]
    Malformed(String),
}
