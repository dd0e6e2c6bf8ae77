//! Library configuration
//!
//! Defaults applied when callers omit options. Hosts typically embed
//! [`OverlayConfig`] in their own configuration file and deserialize it
//! alongside the rest of their settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configurable defaults for dialogs and toasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Label for the primary action when the caller supplies none.
    pub confirm_label: String,

    /// Label for the secondary action when the caller supplies none.
    pub cancel_label: String,

    /// Whether alert dialogs may be dismissed with Escape by default.
    pub alert_dismiss_on_escape: bool,

    /// Whether alert dialogs may be dismissed by clicking the overlay by default.
    pub alert_dismiss_on_overlay: bool,

    /// Whether dialogs wait for the renderer's exit animation before settling.
    ///
    /// When enabled, a decided session moves to an exiting phase and the
    /// renderer must report completion via
    /// [`DialogManager::exit_complete`](crate::dialog::DialogManager::exit_complete).
    pub animate_close: bool,

    /// Auto-dismiss delay applied to toasts that don't specify one.
    pub toast_auto_dismiss: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            confirm_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            alert_dismiss_on_escape: true,
            alert_dismiss_on_overlay: true,
            animate_close: false,
            toast_auto_dismiss: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_contract() {
        let config = OverlayConfig::default();
        assert_eq!(config.confirm_label, "OK");
        assert_eq!(config.cancel_label, "Cancel");
        assert!(config.alert_dismiss_on_escape);
        assert!(config.alert_dismiss_on_overlay);
        assert!(!config.animate_close);
        assert_eq!(config.toast_auto_dismiss, Duration::from_secs(3));
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: OverlayConfig =
            serde_json::from_str(r#"{"confirm_label": "Proceed"}"#).unwrap();
        assert_eq!(config.confirm_label, "Proceed");
        assert_eq!(config.cancel_label, "Cancel");
        assert_eq!(config.toast_auto_dismiss, Duration::from_secs(3));
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = OverlayConfig {
            confirm_label: "Yes".to_string(),
            animate_close: true,
            ..OverlayConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: OverlayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.confirm_label, "Yes");
        assert!(back.animate_close);
    }
}
