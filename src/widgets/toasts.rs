//! Toast stack widget
//!
//! Reference renderer for the toast collection: bordered cards anchored to
//! the bottom-right corner, newest nearest the corner, insertion order
//! preserved going up.

use super::theme::OverlayTheme;
use crate::toast::ToastRecord;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const CARD_WIDTH: u16 = 36;

/// Stateless renderer for the visible toast collection.
#[derive(Debug, Default)]
pub struct ToastStack;

impl ToastStack {
    pub fn new() -> Self {
        Self
    }

    /// Draw the toasts into the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, toasts: &[ToastRecord], theme: &OverlayTheme) {
        let width = CARD_WIDTH.min(area.width);
        if width < 6 {
            return;
        }
        let inner_width = width.saturating_sub(4).max(1) as usize;

        let mut bottom = area.y + area.height;
        for record in toasts.iter().rev() {
            let height = Self::card_height(record, inner_width);
            if height > bottom - area.y {
                break; // no room left above the previous card
            }
            let card = Rect {
                x: area.x + area.width.saturating_sub(width),
                y: bottom - height,
                width,
                height,
            };
            self.render_card(frame, card, record, theme);
            bottom = card.y;
        }
    }

    fn card_height(record: &ToastRecord, inner_width: usize) -> u16 {
        let title_lines = u16::from(record.title.is_some());
        let description_lines = record
            .description
            .as_deref()
            .map_or(0, |text| textwrap::wrap(text, inner_width).len() as u16);
        (title_lines + description_lines).max(1) + 2
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, record: &ToastRecord, theme: &OverlayTheme) {
        frame.render_widget(Clear, area);

        let accent = theme.toast_color(record.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.surface));
        frame.render_widget(block, area);

        let content = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };

        let mut lines = Vec::new();
        if let Some(title) = &record.title {
            // Long titles are clipped rather than wrapped.
            let mut title = title.clone();
            while title.width() > content.width as usize {
                title.pop();
            }
            lines.push(Line::from(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(description) = &record.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(theme.text),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, content);
    }
}
