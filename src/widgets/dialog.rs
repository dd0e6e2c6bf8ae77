//! Modal dialog widget
//!
//! Reference renderer for [`DialogView`]: a centered bordered box with the
//! title, wrapped description, and the action buttons. Keyboard handling is
//! translated into [`DialogAction`]s that the host forwards to the
//! [`DialogManager`](crate::dialog::DialogManager).

use super::theme::OverlayTheme;
use crate::dialog::{DialogKind, DialogView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// User intent derived from a key press on an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Primary action: settle `true` (confirm) or acknowledge (alert).
    Confirm,
    /// Secondary action, confirmation dialogs only.
    Cancel,
    /// Escape dismissal; the manager re-checks the session flag.
    Dismiss,
}

/// Stateful widget for the active dialog session.
///
/// Holds only button selection; all session state stays in the manager.
#[derive(Debug)]
pub struct DialogWidget {
    selected_confirm: bool,
}

impl DialogWidget {
    pub fn new() -> Self {
        Self {
            selected_confirm: true,
        }
    }

    /// Reset selection for a freshly opened session. The primary action
    /// starts focused.
    pub fn reset(&mut self) {
        self.selected_confirm = true;
    }

    pub fn selected_confirm(&self) -> bool {
        self.selected_confirm
    }

    /// Translate a key press into an action for the manager.
    ///
    /// Input while the session is exiting is swallowed; the decision has
    /// already been made.
    pub fn handle_key(&mut self, view: &DialogView, key: KeyEvent) -> Option<DialogAction> {
        if view.exiting {
            return None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                // Alerts have a single button; nothing to toggle.
                if view.kind == DialogKind::Confirm {
                    self.selected_confirm = !self.selected_confirm;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.selected_confirm || view.kind == DialogKind::Alert {
                    Some(DialogAction::Confirm)
                } else {
                    Some(DialogAction::Cancel)
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') if view.kind == DialogKind::Confirm => {
                Some(DialogAction::Confirm)
            }
            KeyCode::Char('n') | KeyCode::Char('N') if view.kind == DialogKind::Confirm => {
                Some(DialogAction::Cancel)
            }
            KeyCode::Esc if key.modifiers.is_empty() && view.dismiss_on_escape => {
                Some(DialogAction::Dismiss)
            }
            _ => None,
        }
    }

    /// Draw the dialog centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, view: &DialogView, theme: &OverlayTheme) {
        let dialog_area = self.dialog_area(area, view);
        frame.render_widget(Clear, dialog_area);

        let accent = theme.tone_color(view.tone);
        let mut base = Style::default().fg(theme.text).bg(theme.surface);
        if view.exiting {
            base = base.add_modifier(Modifier::DIM);
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(base);
        if let Some(title) = &view.title {
            block = block.title(title.clone());
        }
        let content_area = Rect {
            x: dialog_area.x + 2,
            y: dialog_area.y + 1,
            width: dialog_area.width.saturating_sub(4),
            height: dialog_area.height.saturating_sub(2),
        };
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(content_area);

        if let Some(description) = &view.description {
            let paragraph = Paragraph::new(description.clone())
                .style(base)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, chunks[0]);
        }

        self.render_buttons(frame, chunks[1], view, theme, base);
    }

    fn render_buttons(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &DialogView,
        theme: &OverlayTheme,
        base: Style,
    ) {
        let focused = Style::default()
            .bg(theme.primary)
            .fg(theme.surface)
            .add_modifier(Modifier::BOLD);
        let blurred = base.fg(theme.text_muted);

        match &view.cancel_label {
            Some(cancel_label) => {
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);

                let cancel = Paragraph::new(format!(" {cancel_label} "))
                    .style(if self.selected_confirm { blurred } else { focused })
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(cancel, halves[0]);

                let confirm = Paragraph::new(format!(" {} ", view.confirm_label))
                    .style(if self.selected_confirm { focused } else { blurred })
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(confirm, halves[1]);
            }
            None => {
                let confirm = Paragraph::new(format!(" {} ", view.confirm_label))
                    .style(focused)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(confirm, area);
            }
        }
    }

    /// Size the dialog to its content and center it.
    fn dialog_area(&self, area: Rect, view: &DialogView) -> Rect {
        let title_width = view.title.as_deref().map_or(0, UnicodeWidthStr::width);
        let buttons_width = view.confirm_label.width()
            + view
                .cancel_label
                .as_deref()
                .map_or(0, |label| label.width() + 8);
        let width = (title_width.max(buttons_width).max(32) as u16 + 8).min(area.width);

        let inner_width = width.saturating_sub(4).max(1) as usize;
        let description_lines = view
            .description
            .as_deref()
            .map_or(0, |text| textwrap::wrap(text, inner_width).len() as u16);
        let height = (description_lines + 6).min(area.height);

        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

impl Default for DialogWidget {
    fn default() -> Self {
        Self::new()
    }
}
