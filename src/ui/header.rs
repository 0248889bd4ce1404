//! Top navigation bar
//!
//! Brand, page links (more of them once signed in), the global search box and the
//! sign in/out entry.

use crate::app::{App, Focus, Message, Page};
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub search_query: String,
}

impl HeaderState {
    /// A non-blank query leads to the search page and clears the box; blank
    /// submissions do nothing
    pub fn submit_search(&mut self) -> Option<Message> {
        if self.search_query.trim().is_empty() {
            return None;
        }
        tracing::info!("Header search submitted: {:?}", self.search_query);
        self.search_query.clear();
        Some(Message::Navigate(Page::Search))
    }
}

/// Nav entries as (key, label, page)
pub fn nav_entries(is_authenticated: bool) -> Vec<(char, &'static str, Page)> {
    let mut entries = vec![
        ('d', "Dashboard", Page::Dashboard),
        ('c', "Community", Page::Community),
        ('a', "AI Search", Page::AiSearch),
    ];
    if is_authenticated {
        entries.extend([
            ('n', "New Snippet", Page::NewSnippet),
            ('p', "Profile", Page::Profile),
            ('s', "Settings", Page::Settings),
        ]);
    }
    entries
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Fill(1),
        Constraint::Length(28),
        Constraint::Length(14),
    ])
    .split(area);

    let border = Style::default().fg(RosePine::HIGHLIGHT_HIGH);

    Paragraph::new(Line::from(vec![
        Span::styled("</> ", Style::default().fg(RosePine::IRIS).bold()),
        Span::styled("DevVault", Style::default().fg(RosePine::ROSE).bold()),
    ]))
    .block(Block::bordered().border_type(BorderType::Rounded).style(border))
    .render(chunks[0], frame.buffer_mut());

    let mut nav = Vec::new();
    for (key, label, page) in nav_entries(app.is_authenticated) {
        let style = if app.page == page {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold()
        } else {
            Style::default().fg(RosePine::TEXT)
        };
        nav.push(Span::styled(format!(" {} ", label), style));
        nav.push(Span::styled(
            format!("[{}] ", key),
            Style::default().fg(RosePine::MUTED),
        ));
    }
    Paragraph::new(Line::from(nav))
        .block(Block::bordered().border_type(BorderType::Rounded).style(border))
        .render(chunks[1], frame.buffer_mut());

    let focused = app.focus == Focus::HeaderSearch;
    let search_line = if app.header.search_query.is_empty() && !focused {
        Line::from(Span::styled(
            " Search snippets... [/]",
            Style::default().fg(RosePine::MUTED).italic(),
        ))
    } else {
        let mut spans = vec![Span::styled(
            format!(" {}", app.header.search_query),
            Style::default().fg(RosePine::TEXT),
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(RosePine::IRIS)));
        }
        Line::from(spans)
    };
    let search_border = if focused { RosePine::IRIS } else { RosePine::HIGHLIGHT_HIGH };
    Paragraph::new(search_line)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(search_border)),
        )
        .render(chunks[2], frame.buffer_mut());

    let auth = if app.is_authenticated {
        Span::styled(" Log out [u]", Style::default().fg(RosePine::LOVE))
    } else {
        Span::styled(" Sign In [u]", Style::default().fg(RosePine::FOAM).bold())
    };
    Paragraph::new(Line::from(auth))
        .block(Block::bordered().border_type(BorderType::Rounded).style(border))
        .render(chunks[3], frame.buffer_mut());
}
