//! Core toast types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Unique identifier for a toast notification.
///
/// Ids are monotonically increasing for the lifetime of the manager, so they
/// double as a creation-order tiebreaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    pub fn value(self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn for_tests(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Visual classification of a toast. Decorative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Error,
    Info,
}

/// Auto-expiry policy for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoDismiss {
    /// Use the configured default delay.
    #[default]
    Default,
    /// Never expire; removed only by explicit dismissal.
    Sticky,
    /// Expire after the given delay. A zero delay behaves like `Sticky`.
    After(Duration),
}

/// Options for posting a toast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub auto_dismiss: AutoDismiss,
    /// Opaque style overrides forwarded untouched to the renderer.
    pub styles: HashMap<String, String>,
}

impl ToastOptions {
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

    pub fn auto_dismiss_after(mut self, delay: Duration) -> Self {
        self.auto_dismiss = AutoDismiss::After(delay);
        self
    }

    pub fn sticky(mut self) -> Self {
        self.auto_dismiss = AutoDismiss::Sticky;
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }
}

/// One live notification in the visible collection.
///
/// Doubles as the declarative view handed to the renderer.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Resolved expiry delay; `None` means sticky.
    pub auto_dismiss: Option<Duration>,
    pub styles: HashMap<String, String>,
    /// When the toast was posted. Renderers may use this for fade effects.
    pub created_at: Instant,
}
