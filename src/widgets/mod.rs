//! Reference presentation layer
//!
//! Optional ratatui widgets for hosts that don't bring their own rendering.
//! The core operates purely on the declarative view types; these widgets
//! consume them and translate input back into manager calls.

mod dialog;
mod theme;
mod toasts;

pub use dialog::{DialogAction, DialogWidget};
pub use theme::OverlayTheme;
pub use toasts::ToastStack;
