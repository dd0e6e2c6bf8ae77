//! Core dialog types
//!
//! Option structs consumed by the facade and the declarative view handed to
//! the renderer. Nothing here carries behavior; the state machine lives in
//! the manager.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Monotonic identifier for a dialog session.
///
/// Also used to filter stale exit-animation signals: only the signal carrying
/// the currently exiting session's id settles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(crate) u64);

impl SessionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// What kind of decision a dialog asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Binary decision: proceed or cancel.
    Confirm,
    /// Single acknowledgement; there is no "false" outcome.
    Alert,
}

/// Decorative severity tag. Affects styling only, never core behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Danger,
}

/// Options for [`Overlays::confirm`](crate::Overlays::confirm).
///
/// Unset fields fall back to the configured defaults; the dismissal flags
/// default to enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub tone: Tone,
    pub dismiss_on_overlay: Option<bool>,
    pub dismiss_on_escape: Option<bool>,
    /// Opaque style overrides forwarded untouched to the renderer.
    pub styles: HashMap<String, String>,
}

impl ConfirmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn dismiss_on_overlay(mut self, allowed: bool) -> Self {
        self.dismiss_on_overlay = Some(allowed);
        self
    }

    pub fn dismiss_on_escape(mut self, allowed: bool) -> Self {
        self.dismiss_on_escape = Some(allowed);
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }
}

/// Options for [`Overlays::alert`](crate::Overlays::alert).
///
/// Same shape as [`ConfirmOptions`] minus the cancel label; the dismissal
/// flags fall back to the `alert_dismiss_*` configuration defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub confirm_label: Option<String>,
    pub tone: Tone,
    pub dismiss_on_overlay: Option<bool>,
    pub dismiss_on_escape: Option<bool>,
    pub styles: HashMap<String, String>,
}

impl AlertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn dismiss_on_overlay(mut self, allowed: bool) -> Self {
        self.dismiss_on_overlay = Some(allowed);
        self
    }

    pub fn dismiss_on_escape(mut self, allowed: bool) -> Self {
        self.dismiss_on_escape = Some(allowed);
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }
}

/// Declarative description of the dialog to draw.
///
/// The renderer reports user actions back through the manager methods; the
/// view itself is inert data.
#[derive(Debug, Clone)]
pub struct DialogView {
    pub id: SessionId,
    pub kind: DialogKind,
    pub title: Option<String>,
    pub description: Option<String>,
    pub confirm_label: String,
    /// Present only for confirmation sessions.
    pub cancel_label: Option<String>,
    pub tone: Tone,
    pub dismiss_on_overlay: bool,
    pub dismiss_on_escape: bool,
    /// The session is decided and waiting for the exit animation to finish.
    pub exiting: bool,
    pub styles: HashMap<String, String>,
}
