//! Transient notifications
//!
//! Fire-and-forget: callers push a message and move on, nothing reads a toast back.

use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
            ToastLevel::Info => "ℹ",
        }
    }

    fn color(&self) -> Color {
        match self {
            ToastLevel::Success => RosePine::FOAM,
            ToastLevel::Error => RosePine::LOVE,
            ToastLevel::Info => RosePine::IRIS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        tracing::debug!("toast {:?}: {}", level, message);
        self.queue.push_back(Toast {
            level,
            message,
            created_at: Instant::now(),
        });
        while self.queue.len() > MAX_TOASTS {
            self.queue.pop_front();
        }
    }

    /// Drops every toast older than the configured lifetime
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.queue.iter()
    }
}

/// Stacks queued toasts in the top-right corner, newest on top
pub fn render(frame: &mut Frame, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }

    let area = frame.area();
    for (slot, toast) in toasts.iter().rev().enumerate() {
        let y = 1 + slot as u16 * 3;
        if y + 3 > area.height {
            break;
        }
        render_toast(frame, toast, Rect::new(area.x, area.y + y, area.width, 3));
    }
}

fn render_toast(frame: &mut Frame, toast: &Toast, row: Rect) {
    let width = (toast.message.chars().count() as u16 + 8).clamp(24, row.width.max(24));
    let popup = Rect::new(
        row.x + row.width.saturating_sub(width + 1),
        row.y,
        width.min(row.width),
        row.height,
    );

    Clear.render(popup, frame.buffer_mut());

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(toast.level.color()).bg(RosePine::SURFACE));
    let inner = block.inner(popup);
    block.render(popup, frame.buffer_mut());

    let chunks = Layout::horizontal([Constraint::Length(3), Constraint::Fill(1)]).split(inner);

    Paragraph::new(toast.level.icon())
        .alignment(Alignment::Center)
        .style(Style::default().fg(toast.level.color()).bold())
        .render(chunks[0], frame.buffer_mut());

    Paragraph::new(toast.message.as_str())
        .style(Style::default().fg(RosePine::TEXT))
        .render(chunks[1], frame.buffer_mut());
}
