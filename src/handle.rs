//! The overlay facade
//!
//! [`Overlays`] bundles the three operations calling code needs: request a
//! confirmation, request an acknowledgement, and post a toast. It owns no
//! state beyond the configured defaults; everything lives in the two
//! managers it forwards to.

use crate::{
    bridge::Settle,
    config::OverlayConfig,
    dialog::{AlertOptions, ConfirmOptions, DialogManager, SessionParams},
    events::OverlayEvent,
    toast::{ToastId, ToastKind, ToastManager, ToastOptions, ToastRecord},
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Handle to the dialog and toast subsystems.
///
/// Constructed once by the host (the provider role) and cloned into whatever
/// components need it; clones share all state.
#[derive(Debug, Clone)]
pub struct Overlays {
    config: Arc<OverlayConfig>,
    dialogs: DialogManager,
    toasts: Toasts,
}

impl Overlays {
    /// Create the overlay subsystems with the given defaults.
    pub fn new(config: OverlayConfig) -> Self {
        let config = Arc::new(config);
        let dialogs = DialogManager::new(&config);
        let toasts = Toasts {
            config: Arc::clone(&config),
            manager: ToastManager::new(),
        };
        Self {
            config,
            dialogs,
            toasts,
        }
    }

    /// Install one event sender on both managers so the host's loop hears
    /// about every overlay state change.
    pub async fn set_event_sender(&self, sender: mpsc::UnboundedSender<OverlayEvent>) {
        self.dialogs.set_event_sender(sender.clone()).await;
        self.toasts.manager.set_event_sender(sender).await;
    }

    /// Request a binary user decision.
    ///
    /// Opens a confirmation dialog (replacing any active session, which then
    /// resolves `false`) and suspends the caller until the user decides.
    /// Returns `true` for the confirm action, `false` for cancel, escape, or
    /// overlay dismissal.
    pub async fn confirm(&self, options: ConfirmOptions) -> bool {
        let (settle, outcome) = Settle::channel();
        let params = SessionParams::confirm(options, &self.config);
        let id = self.dialogs.open(params, settle).await;
        debug!(session = id.value(), "confirmation requested");
        // A torn-down manager drops the settle handle; read that as dismissed.
        outcome.await.unwrap_or(false)
    }

    /// Request a single acknowledgement.
    ///
    /// Opens an alert dialog and suspends the caller until it is dismissed.
    /// Every dismissal path resolves the request; there is no "false"
    /// outcome.
    pub async fn alert(&self, options: AlertOptions) {
        let (settle, outcome) = Settle::channel();
        let params = SessionParams::alert(options, &self.config);
        let id = self.dialogs.open(params, settle).await;
        debug!(session = id.value(), "acknowledgement requested");
        let _ = outcome.await;
    }

    /// The toast operations.
    pub fn toast(&self) -> &Toasts {
        &self.toasts
    }

    /// The dialog controller, exposed for renderers and focus registration.
    pub fn dialogs(&self) -> &DialogManager {
        &self.dialogs
    }

    /// The configured defaults.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }
}

/// Toast operations grouped under [`Overlays::toast`].
#[derive(Debug, Clone)]
pub struct Toasts {
    config: Arc<OverlayConfig>,
    manager: ToastManager,
}

impl Toasts {
    /// Post a success toast.
    pub async fn success(&self, options: ToastOptions) -> ToastId {
        self.custom(ToastKind::Success, options).await
    }

    /// Post an error toast.
    pub async fn error(&self, options: ToastOptions) -> ToastId {
        self.custom(ToastKind::Error, options).await
    }

    /// Post an info toast.
    pub async fn info(&self, options: ToastOptions) -> ToastId {
        self.custom(ToastKind::Info, options).await
    }

    /// Post a toast with an explicit kind.
    pub async fn custom(&self, kind: ToastKind, options: ToastOptions) -> ToastId {
        self.manager
            .post(kind, options, self.config.toast_auto_dismiss)
            .await
    }

    /// Dismiss a toast by id. Removing an absent id is a no-op.
    pub async fn dismiss(&self, id: ToastId) {
        self.manager.remove(id).await;
    }

    /// Dismiss every toast.
    pub async fn clear(&self) {
        self.manager.clear().await;
    }

    /// Snapshot of the visible toasts in display order.
    pub async fn view(&self) -> Vec<ToastRecord> {
        self.manager.view().await
    }

    /// The underlying manager, for hosts that want direct access.
    pub fn manager(&self) -> &ToastManager {
        &self.manager
    }
}
