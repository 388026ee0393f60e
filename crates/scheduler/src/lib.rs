//! Periodic alert evaluation.
//!
//! This crate provides the scheduling building blocks and the orchestrator:
//! - wall-clock `HH:MM` matching against a watch's alert times
//! - the clear/congested decision
//! - the tick loop driving storage → routing → decision → composition →
//!   delivery, with per-watch failure isolation

pub mod decision;
pub mod matcher;
pub mod tick;

pub use decision::decide;
pub use matcher::{matches, wall_clock_hhmm};
pub use tick::{TrafficAlertScheduler, WatchOutcome};
