//! # Application State
//!
//! Shared state handed to commands:
//!
//! - [`floor`] - The in-memory floor behind a mutex
//! - [`notifications`] - The active toast list with self-expiry

pub mod floor;
pub mod notifications;

pub use floor::FloorState;
pub use notifications::{Notification, NotificationCenter, NotificationKind, NOTIFICATION_TTL};
