//! Color scheme for the bundled widgets
//!
//! Hosts with their own theming can ignore this and render the view types
//! themselves; the core never reads these colors.

use crate::{dialog::Tone, toast::ToastKind};
use ratatui::style::Color;

/// Colors used by [`DialogWidget`](super::DialogWidget) and
/// [`ToastStack`](super::ToastStack).
#[derive(Debug, Clone)]
pub struct OverlayTheme {
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub surface: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self {
            border: Color::Rgb(88, 96, 112),
            text: Color::Rgb(220, 223, 228),
            text_muted: Color::Rgb(140, 146, 160),
            primary: Color::Rgb(97, 175, 239),
            surface: Color::Rgb(40, 44, 52),
            success: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),
            warning: Color::Rgb(229, 192, 123),
            info: Color::Rgb(86, 182, 194),
        }
    }
}

impl OverlayTheme {
    /// Accent color for a dialog tone.
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Default => self.border,
            Tone::Info => self.info,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Danger => self.error,
        }
    }

    /// Accent color for a toast kind.
    pub fn toast_color(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Default => self.border,
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
            ToastKind::Info => self.info,
        }
    }
}
