//! Notification rendering and delivery.
//!
//! This crate provides:
//! - `Notifier` trait for pluggable delivery channels
//! - SMTP email delivery via `lettre`
//! - A null channel that logs instead of sending
//! - The composer that renders the clear/congested alert bodies

pub mod composer;
pub mod email;
pub mod null;
pub mod traits;

pub use composer::{compose, NotificationContent};
pub use email::EmailNotifier;
pub use null::NullNotifier;
pub use traits::{Notifier, NotifyError};
