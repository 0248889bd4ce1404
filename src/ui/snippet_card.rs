//! Snippet card
//!
//! Renders one snippet and turns card actions into events for the owning page. Copy and
//! like are handled here; view, edit and delete are handed to the parent.

use crate::clipboard::{Clipboard, copy_with_feedback};
use crate::models::Snippet;
use crate::ui::colors::{RosePine, language_color};
use crate::ui::components::{format_count, highlighted_lines, truncate_to_width};
use crate::ui::toast::Toasts;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, ListItem, Paragraph, Widget, Wrap},
};

const VISIBLE_TAGS: usize = 3;
const PREVIEW_LINES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    View,
    Copy,
    Like,
    Edit,
    Delete,
}

/// What a card asks its parent to do
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    View(Snippet),
    Edit(Snippet),
    Delete(String),
}

/// Per-card local state. The like flag is never written back to the snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetCard {
    pub is_liked: bool,
}

impl SnippetCard {
    pub fn handle(
        &mut self,
        action: CardAction,
        snippet: &Snippet,
        clipboard: &mut dyn Clipboard,
        toasts: &mut Toasts,
    ) -> Option<CardEvent> {
        match action {
            CardAction::Copy => {
                copy_with_feedback(clipboard, &snippet.code, toasts);
                None
            }
            CardAction::Like => {
                self.is_liked = !self.is_liked;
                if self.is_liked {
                    toasts.success("Added to favorites");
                } else {
                    toasts.success("Removed from favorites");
                }
                None
            }
            CardAction::View => Some(CardEvent::View(snippet.clone())),
            CardAction::Edit => Some(CardEvent::Edit(snippet.clone())),
            CardAction::Delete => {
                toasts.success("Snippet deleted successfully");
                Some(CardEvent::Delete(snippet.id.clone()))
            }
        }
    }
}

/// First three tags followed by `+N` for the rest
pub fn tag_summary(tags: &[String]) -> Vec<String> {
    let mut shown: Vec<String> = tags
        .iter()
        .take(VISIBLE_TAGS)
        .map(|t| format!("#{}", t))
        .collect();
    if tags.len() > VISIBLE_TAGS {
        shown.push(format!("+{}", tags.len() - VISIBLE_TAGS));
    }
    shown
}

fn badge_line(snippet: &Snippet) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", snippet.language.display_name()),
            Style::default()
                .fg(RosePine::BASE)
                .bg(language_color(snippet.language))
                .bold(),
        ),
        Span::raw(" "),
    ];
    if snippet.is_public {
        spans.push(Span::styled("🌐 public ", Style::default().fg(RosePine::FOAM)));
    } else {
        spans.push(Span::styled("🔒 private ", Style::default().fg(RosePine::MUTED)));
    }
    for tag in tag_summary(&snippet.tags) {
        spans.push(Span::styled(
            format!("{} ", tag),
            Style::default().fg(RosePine::IRIS),
        ));
    }
    Line::from(spans)
}

fn stats_line(snippet: &Snippet, card: &SnippetCard) -> Line<'static> {
    let heart = if card.is_liked { "♥" } else { "♡" };
    Line::from(vec![
        Span::styled(
            format!("👁 {}  ", format_count(snippet.views)),
            Style::default().fg(RosePine::SUBTLE),
        ),
        Span::styled(
            format!("{} {}  ", heart, format_count(snippet.likes)),
            Style::default().fg(RosePine::LOVE),
        ),
        Span::styled(
            format!("⑂ {}  ", format_count(snippet.forks)),
            Style::default().fg(RosePine::GOLD),
        ),
        Span::styled(
            format!("by {} · {}", snippet.author, snippet.updated_at.format("%b %-d, %Y")),
            Style::default().fg(RosePine::MUTED),
        ),
    ])
}

/// Three-line list entry: title, badges, counters
pub fn list_item(snippet: &Snippet, card: &SnippetCard, width: u16) -> ListItem<'static> {
    let title = truncate_to_width(&snippet.title, width.saturating_sub(4) as usize);
    ListItem::new(vec![
        Line::from(Span::styled(title, Style::default().fg(RosePine::TEXT).bold())),
        badge_line(snippet),
        stats_line(snippet, card),
        Line::from(""),
    ])
}

/// Full card with description and highlighted code preview
pub fn render(frame: &mut Frame, area: Rect, snippet: &Snippet, card: &SnippetCard, theme: &str) {
    let block = Block::bordered()
        .title(format!(" {} ", snippet.title))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);

    Paragraph::new(badge_line(snippet)).render(chunks[0], frame.buffer_mut());

    Paragraph::new(snippet.description.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(RosePine::SUBTLE))
        .render(chunks[1], frame.buffer_mut());

    Paragraph::new(stats_line(snippet, card)).render(chunks[2], frame.buffer_mut());

    let code = snippet.preview(PREVIEW_LINES);
    let code_block = Block::bordered()
        .title(format!(" {} lines ", snippet.line_count()))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH).bg(RosePine::SURFACE));

    Paragraph::new(highlighted_lines(&code, snippet.language, theme))
        .block(code_block)
        .render(chunks[3], frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::models::fixtures;
    use std::time::Duration;

    fn setup() -> (Snippet, MemoryClipboard, Toasts) {
        (
            fixtures::dashboard_snippets().remove(0),
            MemoryClipboard::default(),
            Toasts::new(Duration::from_secs(3)),
        )
    }

    #[test]
    fn test_like_toggles_and_toasts_by_previous_state() {
        let (snippet, mut clipboard, mut toasts) = setup();
        let mut card = SnippetCard::default();

        card.handle(CardAction::Like, &snippet, &mut clipboard, &mut toasts);
        assert!(card.is_liked);
        assert_eq!(toasts.latest().unwrap().message, "Added to favorites");

        card.handle(CardAction::Like, &snippet, &mut clipboard, &mut toasts);
        assert!(!card.is_liked);
        assert_eq!(toasts.latest().unwrap().message, "Removed from favorites");
    }

    #[test]
    fn test_like_does_not_touch_record() {
        let (snippet, mut clipboard, mut toasts) = setup();
        let before = snippet.likes;
        let mut card = SnippetCard::default();

        card.handle(CardAction::Like, &snippet, &mut clipboard, &mut toasts);
        assert_eq!(snippet.likes, before);
    }

    #[test]
    fn test_copy_writes_code() {
        let (snippet, mut clipboard, mut toasts) = setup();
        let mut card = SnippetCard::default();

        let event = card.handle(CardAction::Copy, &snippet, &mut clipboard, &mut toasts);

        assert!(event.is_none());
        assert_eq!(clipboard.contents.as_deref(), Some(snippet.code.as_str()));
    }

    #[test]
    fn test_delete_bubbles_id() {
        let (snippet, mut clipboard, mut toasts) = setup();
        let mut card = SnippetCard::default();

        let event = card.handle(CardAction::Delete, &snippet, &mut clipboard, &mut toasts);

        assert_eq!(event, Some(CardEvent::Delete(snippet.id.clone())));
        assert_eq!(
            toasts.latest().unwrap().message,
            "Snippet deleted successfully"
        );
    }

    #[test]
    fn test_view_and_edit_bubble_snippet() {
        let (snippet, mut clipboard, mut toasts) = setup();
        let mut card = SnippetCard::default();

        assert!(matches!(
            card.handle(CardAction::View, &snippet, &mut clipboard, &mut toasts),
            Some(CardEvent::View(s)) if s.id == snippet.id
        ));
        assert!(matches!(
            card.handle(CardAction::Edit, &snippet, &mut clipboard, &mut toasts),
            Some(CardEvent::Edit(_))
        ));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_tag_summary_overflow() {
        let tags: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|t| t.to_string()).collect();
        assert_eq!(tag_summary(&tags), vec!["#a", "#b", "#c", "+2"]);
        assert_eq!(tag_summary(&tags[..2]), vec!["#a", "#b"]);
    }
}
