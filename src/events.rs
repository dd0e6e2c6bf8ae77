//! Overlay lifecycle events
//!
//! Managers push these to the host's event loop so it can redraw without
//! polling. Delivery is optional: without an installed sender the managers
//! run silently.

use crate::{dialog::SessionId, toast::ToastId};
use tokio::sync::mpsc;

/// Notification of an overlay state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A dialog session became active.
    DialogOpened(SessionId),

    /// A decided session entered its exit animation; the renderer should
    /// report completion via `DialogManager::exit_complete`.
    DialogExiting(SessionId),

    /// A session settled and the controller returned to idle.
    DialogClosed(SessionId),

    /// A toast was appended to the visible collection.
    ToastPosted(ToastId),

    /// A toast left the collection, by timer or by explicit dismissal.
    ToastRemoved(ToastId),
}

/// Forwards events to the host when a sender is installed.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventSink {
    sender: Option<mpsc::UnboundedSender<OverlayEvent>>,
}

impl EventSink {
    pub(crate) fn set(&mut self, sender: mpsc::UnboundedSender<OverlayEvent>) {
        self.sender = Some(sender);
    }

    pub(crate) fn emit(&self, event: OverlayEvent) {
        if let Some(sender) = &self.sender {
            // The host may have dropped its receiver during shutdown.
            let _ = sender.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_without_sender_is_silent() {
        let sink = EventSink::default();
        sink.emit(OverlayEvent::ToastPosted(ToastId::for_tests(0)));
    }

    #[tokio::test]
    async fn emit_forwards_to_installed_sender() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut sink = EventSink::default();
        sink.set(tx);

        let id = ToastId::for_tests(7);
        sink.emit(OverlayEvent::ToastPosted(id));
        assert_eq!(rx.recv().await, Some(OverlayEvent::ToastPosted(id)));
    }
}
