//! Transient toast notifications
//!
//! Toasts stack concurrently, keep their posting order, and expire on
//! independent timers unless sticky. See [`ToastManager`].

mod manager;
mod types;

pub use manager::ToastManager;
pub use types::{AutoDismiss, ToastId, ToastKind, ToastOptions, ToastRecord};
