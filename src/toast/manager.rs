//! Toast lifecycle management
//!
//! The manager owns the ordered collection of live toasts. Posting appends
//! (insertion order is display order) and, for expiring toasts, spawns a
//! one-shot timer task. Timer expiry and manual dismissal both route through
//! the same idempotent [`ToastManager::remove`], so whichever happens first
//! wins and the loser is a harmless no-op.

use super::types::{AutoDismiss, ToastId, ToastKind, ToastOptions, ToastRecord};
use crate::events::{EventSink, OverlayEvent};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

#[derive(Debug)]
struct ToastState {
    next_id: u64,
    records: Vec<ToastRecord>,
    events: EventSink,
}

/// Manager for the live toast collection.
///
/// Cheap to clone; clones share the same collection. Timer tasks hold a
/// clone, which is what lets expiry route through the shared `remove`.
#[derive(Debug, Clone)]
pub struct ToastManager {
    inner: Arc<RwLock<ToastState>>,
}

impl ToastManager {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ToastState {
                next_id: 0,
                records: Vec::new(),
                events: EventSink::default(),
            })),
        }
    }

    /// Install a sender for lifecycle events.
    pub async fn set_event_sender(&self, sender: mpsc::UnboundedSender<OverlayEvent>) {
        self.inner.write().await.events.set(sender);
    }

    /// Append a toast and schedule its expiry timer when one applies.
    ///
    /// Always succeeds; there is no bound on concurrent toasts.
    pub(crate) async fn post(
        &self,
        kind: ToastKind,
        options: ToastOptions,
        default_delay: Duration,
    ) -> ToastId {
        let delay = match options.auto_dismiss {
            AutoDismiss::Default => Some(default_delay),
            AutoDismiss::Sticky => None,
            AutoDismiss::After(delay) => Some(delay),
        }
        .filter(|delay| !delay.is_zero());

        let id = {
            let mut state = self.inner.write().await;
            let id = ToastId(state.next_id);
            state.next_id += 1;
            state.records.push(ToastRecord {
                id,
                kind,
                title: options.title,
                description: options.description,
                auto_dismiss: delay,
                styles: options.styles,
                created_at: Instant::now(),
            });
            state.events.emit(OverlayEvent::ToastPosted(id));
            id
        };
        debug!(toast = id.value(), ?kind, "toast posted");

        if let Some(delay) = delay {
            let manager = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                // Fires harmlessly if the toast was dismissed manually.
                manager.remove(id).await;
            });
        }

        id
    }

    /// Remove a toast by id.
    ///
    /// Idempotent: removing an absent id is a no-op. Returns whether a record
    /// was actually removed.
    pub async fn remove(&self, id: ToastId) -> bool {
        let mut state = self.inner.write().await;
        let before = state.records.len();
        state.records.retain(|record| record.id != id);
        let removed = state.records.len() != before;
        if removed {
            state.events.emit(OverlayEvent::ToastRemoved(id));
            debug!(toast = id.value(), "toast removed");
        } else {
            debug!(toast = id.value(), "removal of absent toast ignored");
        }
        removed
    }

    /// Remove every toast at once. Pending timers fire harmlessly afterwards.
    pub async fn clear(&self) {
        let mut state = self.inner.write().await;
        let drained: Vec<ToastRecord> = state.records.drain(..).collect();
        for record in drained {
            state.events.emit(OverlayEvent::ToastRemoved(record.id));
        }
    }

    /// Snapshot of the live collection in display order.
    pub async fn view(&self) -> Vec<ToastRecord> {
        self.inner.read().await.records.clone()
    }

    /// Number of live toasts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Whether no toasts are live.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}
