//! Dialog session lifecycle management
//!
//! The manager owns the single active dialog session and is responsible for:
//! - Publishing a new session when a confirm/alert request arrives
//! - Routing dismissal triggers to the session's settlement handle
//! - Deferring settlement through the exiting phase when close animation
//!   is enabled
//! - Capturing keyboard focus on open and restoring it on close

use super::types::{AlertOptions, ConfirmOptions, DialogKind, DialogView, SessionId, Tone};
use crate::{
    bridge::Settle,
    config::OverlayConfig,
    events::{EventSink, OverlayEvent},
    focus::{FocusId, FocusRegistry},
};
use std::collections::HashMap;
use std::mem;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

/// Resolved parameters for opening a session, built by the facade from the
/// caller's options and the configured defaults.
#[derive(Debug)]
pub(crate) struct SessionParams {
    kind: DialogKind,
    title: Option<String>,
    description: Option<String>,
    confirm_label: String,
    cancel_label: Option<String>,
    tone: Tone,
    dismiss_on_overlay: bool,
    dismiss_on_escape: bool,
    styles: HashMap<String, String>,
}

impl SessionParams {
    pub(crate) fn confirm(options: ConfirmOptions, config: &OverlayConfig) -> Self {
        Self {
            kind: DialogKind::Confirm,
            title: options.title,
            description: options.description,
            confirm_label: options
                .confirm_label
                .unwrap_or_else(|| config.confirm_label.clone()),
            cancel_label: Some(
                options
                    .cancel_label
                    .unwrap_or_else(|| config.cancel_label.clone()),
            ),
            tone: options.tone,
            dismiss_on_overlay: options.dismiss_on_overlay.unwrap_or(true),
            dismiss_on_escape: options.dismiss_on_escape.unwrap_or(true),
            styles: options.styles,
        }
    }

    pub(crate) fn alert(options: AlertOptions, config: &OverlayConfig) -> Self {
        Self {
            kind: DialogKind::Alert,
            title: options.title,
            description: options.description,
            confirm_label: options
                .confirm_label
                .unwrap_or_else(|| config.confirm_label.clone()),
            cancel_label: None,
            tone: options.tone,
            dismiss_on_overlay: options
                .dismiss_on_overlay
                .unwrap_or(config.alert_dismiss_on_overlay),
            dismiss_on_escape: options
                .dismiss_on_escape
                .unwrap_or(config.alert_dismiss_on_escape),
            styles: options.styles,
        }
    }
}

/// The active dialog session and everything needed to finish it.
#[derive(Debug)]
struct DialogSession {
    id: SessionId,
    kind: DialogKind,
    title: Option<String>,
    description: Option<String>,
    confirm_label: String,
    cancel_label: Option<String>,
    tone: Tone,
    dismiss_on_overlay: bool,
    dismiss_on_escape: bool,
    styles: HashMap<String, String>,
    settle: Settle,
    /// Element that held focus before the session opened.
    restore_focus: Option<FocusId>,
}

/// Session state machine: idle, active, or decided-but-departing.
#[derive(Debug)]
enum SessionPhase {
    Idle,
    Active(DialogSession),
    /// Decision made; settlement deferred until the renderer reports that
    /// the exit animation finished.
    Exiting { session: DialogSession, outcome: bool },
}

#[derive(Debug)]
struct DialogState {
    next_id: u64,
    phase: SessionPhase,
    focus: FocusRegistry,
    events: EventSink,
    animate_close: bool,
}

/// Controller for the single dialog session slot.
///
/// Cheap to clone; clones share the same session slot and focus registry.
#[derive(Debug, Clone)]
pub struct DialogManager {
    inner: Arc<RwLock<DialogState>>,
}

impl DialogManager {
    pub(crate) fn new(config: &OverlayConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DialogState {
                next_id: 0,
                phase: SessionPhase::Idle,
                focus: FocusRegistry::new(),
                events: EventSink::default(),
                animate_close: config.animate_close,
            })),
        }
    }

    /// Install a sender for lifecycle events.
    pub async fn set_event_sender(&self, sender: mpsc::UnboundedSender<OverlayEvent>) {
        self.inner.write().await.events.set(sender);
    }

    /// Open a new session, replacing any prior one.
    ///
    /// Replacement policy: the prior caller's future must never be left
    /// unsettled. A replaced active session resolves as dismissed; an exiting
    /// session is flushed with the outcome it already carries. The new
    /// session inherits the prior session's focus-restoration target when the
    /// registry reports nothing focused (the prior dialog had parked focus).
    pub(crate) async fn open(&self, params: SessionParams, settle: Settle) -> SessionId {
        let mut state = self.inner.write().await;

        let inherited = match mem::replace(&mut state.phase, SessionPhase::Idle) {
            SessionPhase::Idle => None,
            SessionPhase::Active(mut prior) => {
                debug!(session = prior.id.value(), "replacing active dialog session");
                prior.settle.settle(false);
                state.events.emit(OverlayEvent::DialogClosed(prior.id));
                prior.restore_focus
            }
            SessionPhase::Exiting {
                mut session,
                outcome,
            } => {
                debug!(session = session.id.value(), "flushing exiting dialog session");
                session.settle.settle(outcome);
                state.events.emit(OverlayEvent::DialogClosed(session.id));
                session.restore_focus
            }
        };

        let id = SessionId(state.next_id);
        state.next_id += 1;

        let restore_focus = state.focus.focused().or(inherited);
        // The dialog takes over keyboard input; the registry parks on none
        // until the session ends.
        state.focus.blur();

        state.phase = SessionPhase::Active(DialogSession {
            id,
            kind: params.kind,
            title: params.title,
            description: params.description,
            confirm_label: params.confirm_label,
            cancel_label: params.cancel_label,
            tone: params.tone,
            dismiss_on_overlay: params.dismiss_on_overlay,
            dismiss_on_escape: params.dismiss_on_escape,
            styles: params.styles,
            settle,
            restore_focus,
        });
        state.events.emit(OverlayEvent::DialogOpened(id));
        debug!(session = id.value(), "dialog session opened");
        id
    }

    /// Confirm action from the renderer. Settles the session with `true`.
    pub async fn resolve_confirm(&self) {
        let mut state = self.inner.write().await;
        if matches!(state.phase, SessionPhase::Active(_)) {
            Self::finish(&mut state, true);
        }
    }

    /// Cancel action from the renderer. Settles a confirmation with `false`.
    ///
    /// Alert sessions have no cancel button, so the call is ignored for them.
    pub async fn resolve_cancel(&self) {
        let mut state = self.inner.write().await;
        let cancellable =
            matches!(&state.phase, SessionPhase::Active(s) if s.kind == DialogKind::Confirm);
        if cancellable {
            Self::finish(&mut state, false);
        } else if matches!(state.phase, SessionPhase::Active(_)) {
            debug!("cancel ignored for alert session");
        }
    }

    /// Escape key pressed while a session is up.
    ///
    /// Dismisses the session iff it allows escape dismissal.
    pub async fn escape_pressed(&self) {
        let mut state = self.inner.write().await;
        let allowed = matches!(&state.phase, SessionPhase::Active(s) if s.dismiss_on_escape);
        if allowed {
            Self::finish(&mut state, false);
        }
    }

    /// Click landed on the overlay backdrop rather than the dialog.
    ///
    /// Dismisses the session iff it allows overlay dismissal.
    pub async fn overlay_clicked(&self) {
        let mut state = self.inner.write().await;
        let allowed = matches!(&state.phase, SessionPhase::Active(s) if s.dismiss_on_overlay);
        if allowed {
            Self::finish(&mut state, false);
        }
    }

    /// Programmatic close. Settles immediately, skipping any exit animation.
    ///
    /// An active confirmation resolves `false`; an exiting session is flushed
    /// with the outcome it already carries.
    pub async fn close(&self) {
        let mut state = self.inner.write().await;
        match mem::replace(&mut state.phase, SessionPhase::Idle) {
            SessionPhase::Idle => {}
            SessionPhase::Active(session) => Self::settle_now(&mut state, session, false),
            SessionPhase::Exiting { session, outcome } => {
                Self::settle_now(&mut state, session, outcome)
            }
        }
    }

    /// Renderer signal that the exit animation for `id` finished.
    ///
    /// Signals carrying any other id are stale (for example an animation end
    /// event that arrives after a programmatic close already settled the
    /// session) and are ignored.
    pub async fn exit_complete(&self, id: SessionId) {
        let mut state = self.inner.write().await;
        let matches_exiting =
            matches!(&state.phase, SessionPhase::Exiting { session, .. } if session.id == id);
        if matches_exiting {
            if let SessionPhase::Exiting { session, outcome } =
                mem::replace(&mut state.phase, SessionPhase::Idle)
            {
                Self::settle_now(&mut state, session, outcome);
            }
        } else {
            debug!(session = id.value(), "ignoring stale exit completion");
        }
    }

    /// Declarative description of what to draw, if a session is up.
    pub async fn view(&self) -> Option<DialogView> {
        let state = self.inner.read().await;
        let (session, exiting) = match &state.phase {
            SessionPhase::Idle => return None,
            SessionPhase::Active(session) => (session, false),
            SessionPhase::Exiting { session, .. } => (session, true),
        };
        Some(DialogView {
            id: session.id,
            kind: session.kind,
            title: session.title.clone(),
            description: session.description.clone(),
            confirm_label: session.confirm_label.clone(),
            cancel_label: session.cancel_label.clone(),
            tone: session.tone,
            dismiss_on_overlay: session.dismiss_on_overlay,
            dismiss_on_escape: session.dismiss_on_escape,
            exiting,
            styles: session.styles.clone(),
        })
    }

    /// Whether no session is active or exiting.
    pub async fn is_idle(&self) -> bool {
        matches!(self.inner.read().await.phase, SessionPhase::Idle)
    }

    /// Register a focusable host element with the shared registry.
    pub async fn register_focus(&self) -> FocusId {
        self.inner.write().await.focus.register()
    }

    /// Remove a host element from the registry.
    pub async fn unregister_focus(&self, id: FocusId) {
        self.inner.write().await.focus.unregister(id);
    }

    /// Move keyboard focus to a registered element.
    pub async fn set_focus(&self, id: FocusId) -> bool {
        self.inner.write().await.focus.focus(id)
    }

    /// Currently focused host element, if any.
    pub async fn focused(&self) -> Option<FocusId> {
        self.inner.read().await.focus.focused()
    }

    /// Move a decided active session towards settlement, honoring the
    /// animation configuration. Callers must have checked the phase.
    fn finish(state: &mut DialogState, outcome: bool) {
        match mem::replace(&mut state.phase, SessionPhase::Idle) {
            SessionPhase::Active(session) => {
                if state.animate_close {
                    state.events.emit(OverlayEvent::DialogExiting(session.id));
                    debug!(session = session.id.value(), outcome, "dialog session exiting");
                    state.phase = SessionPhase::Exiting { session, outcome };
                } else {
                    Self::settle_now(state, session, outcome);
                }
            }
            other => state.phase = other,
        }
    }

    /// Settle the session, restore focus, and return to idle.
    fn settle_now(state: &mut DialogState, mut session: DialogSession, outcome: bool) {
        session.settle.settle(outcome);
        if let Some(target) = session.restore_focus {
            // Skipped silently when the target was unregistered meanwhile.
            state.focus.restore(target);
        }
        state.events.emit(OverlayEvent::DialogClosed(session.id));
        debug!(session = session.id.value(), outcome, "dialog session settled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn confirm_params() -> SessionParams {
        SessionParams::confirm(
            ConfirmOptions::new().with_title("Delete?"),
            &OverlayConfig::default(),
        )
    }

    fn alert_params() -> SessionParams {
        SessionParams::alert(AlertOptions::new().with_title("Done"), &OverlayConfig::default())
    }

    fn manager() -> DialogManager {
        DialogManager::new(&OverlayConfig::default())
    }

    fn animated_manager() -> DialogManager {
        DialogManager::new(&OverlayConfig {
            animate_close: true,
            ..OverlayConfig::default()
        })
    }

    async fn open(manager: &DialogManager, params: SessionParams) -> (SessionId, oneshot::Receiver<bool>) {
        let (settle, receiver) = Settle::channel();
        let id = manager.open(params, settle).await;
        (id, receiver)
    }

    #[tokio::test]
    async fn confirm_action_settles_true_and_returns_to_idle() {
        let manager = manager();
        let (_, receiver) = open(&manager, confirm_params()).await;

        manager.resolve_confirm().await;
        assert!(receiver.await.unwrap());
        assert!(manager.is_idle().await);
    }

    #[tokio::test]
    async fn cancel_action_settles_false() {
        let manager = manager();
        let (_, receiver) = open(&manager, confirm_params()).await;

        manager.resolve_cancel().await;
        assert!(!receiver.await.unwrap());
        assert!(manager.is_idle().await);
    }

    #[tokio::test]
    async fn cancel_is_ignored_for_alert_sessions() {
        let manager = manager();
        let (_, receiver) = open(&manager, alert_params()).await;

        manager.resolve_cancel().await;
        assert!(!manager.is_idle().await);

        manager.resolve_confirm().await;
        assert!(receiver.await.is_ok());
    }

    #[tokio::test]
    async fn escape_honors_session_flag() {
        let manager = manager();
        let params = SessionParams::confirm(
            ConfirmOptions::new().dismiss_on_escape(false),
            &OverlayConfig::default(),
        );
        let (_, receiver) = open(&manager, params).await;

        manager.escape_pressed().await;
        assert!(!manager.is_idle().await);

        manager.resolve_cancel().await;
        assert!(!receiver.await.unwrap());
    }

    #[tokio::test]
    async fn escape_dismisses_when_allowed() {
        let manager = manager();
        let (_, receiver) = open(&manager, confirm_params()).await;

        manager.escape_pressed().await;
        assert!(!receiver.await.unwrap());
    }

    #[tokio::test]
    async fn overlay_click_honors_session_flag() {
        let manager = manager();
        let params = SessionParams::confirm(
            ConfirmOptions::new().dismiss_on_overlay(false),
            &OverlayConfig::default(),
        );
        let (_, _receiver) = open(&manager, params).await;

        manager.overlay_clicked().await;
        assert!(!manager.is_idle().await);
    }

    #[tokio::test]
    async fn replacement_resolves_prior_future_as_dismissed() {
        let manager = manager();
        let (first_id, first) = open(&manager, confirm_params()).await;
        let (second_id, second) = open(&manager, confirm_params()).await;

        assert!(second_id > first_id);
        // The first caller is settled, not abandoned.
        assert!(!first.await.unwrap());

        manager.resolve_confirm().await;
        assert!(second.await.unwrap());
    }

    #[tokio::test]
    async fn view_reflects_session_fields() {
        let manager = manager();
        let params = SessionParams::confirm(
            ConfirmOptions::new()
                .with_title("Delete?")
                .with_description("Gone forever.")
                .with_tone(Tone::Danger),
            &OverlayConfig::default(),
        );
        let (id, _receiver) = open(&manager, params).await;

        let view = manager.view().await.expect("session should be visible");
        assert_eq!(view.id, id);
        assert_eq!(view.kind, DialogKind::Confirm);
        assert_eq!(view.title.as_deref(), Some("Delete?"));
        assert_eq!(view.cancel_label.as_deref(), Some("Cancel"));
        assert_eq!(view.tone, Tone::Danger);
        assert!(!view.exiting);

        manager.close().await;
        assert!(manager.view().await.is_none());
    }

    #[tokio::test]
    async fn alert_view_has_no_cancel_label() {
        let manager = manager();
        let (_, _receiver) = open(&manager, alert_params()).await;
        let view = manager.view().await.unwrap();
        assert_eq!(view.kind, DialogKind::Alert);
        assert!(view.cancel_label.is_none());
    }

    #[tokio::test]
    async fn animated_dismissal_defers_settlement_until_exit_complete() {
        let manager = animated_manager();
        let (id, mut receiver) = open(&manager, confirm_params()).await;

        manager.resolve_confirm().await;
        // Decided but not yet settled.
        assert!(receiver.try_recv().is_err());
        let view = manager.view().await.unwrap();
        assert!(view.exiting);

        // A stale signal for a different session changes nothing.
        manager.exit_complete(SessionId(id.value() + 1)).await;
        assert!(!manager.is_idle().await);

        manager.exit_complete(id).await;
        assert!(receiver.await.unwrap());
        assert!(manager.is_idle().await);
    }

    #[tokio::test]
    async fn close_flushes_exiting_session_with_carried_outcome() {
        let manager = animated_manager();
        let (id, receiver) = open(&manager, confirm_params()).await;

        manager.resolve_confirm().await;
        manager.close().await;
        assert!(receiver.await.unwrap());

        // The animation event arriving afterwards is a no-op.
        manager.exit_complete(id).await;
        assert!(manager.is_idle().await);
    }

    #[tokio::test]
    async fn replacement_flushes_exiting_session() {
        let manager = animated_manager();
        let (_, first) = open(&manager, confirm_params()).await;

        manager.resolve_confirm().await;
        let (_, _second) = open(&manager, confirm_params()).await;
        assert!(first.await.unwrap());
    }

    #[tokio::test]
    async fn focus_is_captured_and_restored() {
        let manager = manager();
        let target = manager.register_focus().await;
        assert!(manager.set_focus(target).await);

        let (_, _receiver) = open(&manager, confirm_params()).await;
        // The dialog parks host focus while it is up.
        assert_eq!(manager.focused().await, None);

        manager.resolve_confirm().await;
        assert_eq!(manager.focused().await, Some(target));
    }

    #[tokio::test]
    async fn focus_restoration_skips_detached_targets() {
        let manager = manager();
        let target = manager.register_focus().await;
        manager.set_focus(target).await;

        let (_, _receiver) = open(&manager, confirm_params()).await;
        manager.unregister_focus(target).await;

        manager.resolve_confirm().await;
        assert_eq!(manager.focused().await, None);
    }

    #[tokio::test]
    async fn replacement_transfers_focus_restoration_target() {
        let manager = manager();
        let target = manager.register_focus().await;
        manager.set_focus(target).await;

        let (_, _first) = open(&manager, confirm_params()).await;
        let (_, _second) = open(&manager, confirm_params()).await;

        manager.resolve_confirm().await;
        assert_eq!(manager.focused().await, Some(target));
    }

    #[tokio::test]
    async fn lifecycle_events_are_emitted_in_order() {
        let manager = manager();
        let (tx, mut rx) = mpsc::unbounded_channel();
        manager.set_event_sender(tx).await;

        let (id, _receiver) = open(&manager, confirm_params()).await;
        manager.resolve_confirm().await;

        assert_eq!(rx.recv().await, Some(OverlayEvent::DialogOpened(id)));
        assert_eq!(rx.recv().await, Some(OverlayEvent::DialogClosed(id)));
    }
}
