//! Promise-based modal dialogs and toast notifications for ratatui apps.
//!
//! `popkit` turns "ask the user something" into a single awaitable call:
//! request a confirmation or an acknowledgement, suspend until the user
//! decides, and never touch dialog visibility, focus bookkeeping, or timers
//! yourself. Toasts stack concurrently and expire on their own.
//!
//! The crate is split into a core (session state machine, toast lifecycle,
//! request/resolution bridge, facade) that knows nothing about drawing, and
//! an optional [`widgets`] module that renders the declarative view types
//! with ratatui.
//!
//! ```no_run
//! use popkit::{ConfirmOptions, OverlayConfig, Overlays, ToastOptions};
//!
//! # async fn demo() {
//! let overlays = Overlays::new(OverlayConfig::default());
//!
//! // Application logic awaits decisions without touching UI state.
//! let ui = overlays.clone();
//! tokio::spawn(async move {
//!     if ui.confirm(ConfirmOptions::new().with_title("Delete file?")).await {
//!         ui.toast().success(ToastOptions::new().with_title("Deleted")).await;
//!     }
//! });
//!
//! // The render loop draws whatever the managers report and feeds user
//! // actions back in (resolve_confirm, resolve_cancel, escape_pressed, ...).
//! if let Some(view) = overlays.dialogs().view().await {
//!     println!("dialog up: {:?}", view.title);
//! }
//! # }
//! ```

pub mod config;
pub mod dialog;
pub mod error;
pub mod events;
pub mod focus;
pub mod scope;
pub mod toast;
pub mod widgets;

mod bridge;
mod handle;

pub use config::OverlayConfig;
pub use dialog::{AlertOptions, ConfirmOptions, DialogKind, DialogView, SessionId, Tone};
pub use error::{Error, Result};
pub use events::OverlayEvent;
pub use focus::{FocusId, FocusRegistry};
pub use handle::{Overlays, Toasts};
pub use scope::OverlayScope;
pub use toast::{AutoDismiss, ToastId, ToastKind, ToastOptions, ToastRecord};
