//! Sign-in prompt
//!
//! Any non-blank email and password are accepted; there is no account store behind it.

use crate::app::Message;
use crate::ui::colors::RosePine;
use crate::ui::components::{centered_rect, render_input};
use crate::ui::toast::Toasts;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct AuthModal {
    pub is_open: bool,
    pub email: String,
    pub password: String,
    pub focus: AuthField,
}

impl AuthModal {
    /// Opens with empty fields
    pub fn open(&mut self) {
        *self = Self {
            is_open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.password.clear();
    }

    pub fn toggle_field(&mut self) {
        self.focus = match self.focus {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Email,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            AuthField::Email => self.email.push(c),
            AuthField::Password => self.password.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            AuthField::Email => self.email.pop(),
            AuthField::Password => self.password.pop(),
        };
    }

    /// `Authenticated` when both fields are filled, otherwise an error toast
    pub fn submit(&self, toasts: &mut Toasts) -> Option<Message> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            toasts.error("Please fill in all fields");
            return None;
        }
        Some(Message::Authenticated)
    }
}

pub fn render(frame: &mut Frame, modal: &AuthModal) {
    let area = centered_rect(50, 12, frame.area());
    Clear.render(area, frame.buffer_mut());

    let block = Block::bordered()
        .title(" Sign in to DevVault ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Double)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::SURFACE));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(inner);

    Paragraph::new("Access your snippets and share with the community")
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::SUBTLE))
        .render(chunks[0], frame.buffer_mut());

    render_input(
        frame,
        chunks[1],
        "Email",
        &modal.email,
        "you@example.com",
        modal.focus == AuthField::Email,
    );

    let masked = "•".repeat(modal.password.chars().count());
    render_input(
        frame,
        chunks[2],
        "Password",
        &masked,
        "••••••••",
        modal.focus == AuthField::Password,
    );

    Paragraph::new("[Tab] Switch  [⏎] Sign In  [Esc] Close")
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::MUTED).italic())
        .render(chunks[3], frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_blank_fields_are_rejected() {
        let mut modal = AuthModal::default();
        modal.open();
        let mut toasts = Toasts::new(Duration::from_secs(3));

        assert_eq!(modal.submit(&mut toasts), None);
        assert_eq!(toasts.latest().unwrap().message, "Please fill in all fields");

        modal.email = "dev@example.com".to_string();
        assert_eq!(modal.submit(&mut toasts), None);
    }

    #[test]
    fn test_filled_fields_authenticate() {
        let mut modal = AuthModal::default();
        modal.open();
        modal.push_char('a');
        modal.toggle_field();
        modal.push_char('b');
        let mut toasts = Toasts::new(Duration::from_secs(3));

        assert_eq!(modal.submit(&mut toasts), Some(Message::Authenticated));
        assert_eq!(modal.email, "a");
        assert_eq!(modal.password, "b");
    }

    #[test]
    fn test_open_clears_previous_input() {
        let mut modal = AuthModal::default();
        modal.open();
        modal.email = "old".to_string();
        modal.close();
        modal.open();
        assert!(modal.email.is_empty());
        assert_eq!(modal.focus, AuthField::Email);
    }
}
