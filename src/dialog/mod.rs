//! Modal dialog sessions
//!
//! A dialog session represents one pending confirm or alert request. At most
//! one session is active at a time; see [`DialogManager`] for the lifecycle
//! and replacement rules.

mod manager;
mod types;

pub use manager::DialogManager;
pub use types::{AlertOptions, ConfirmOptions, DialogKind, DialogView, SessionId, Tone};

pub(crate) use manager::SessionParams;
