//! Community feed
//!
//! Other developers' public snippets under three orderings, plus a featured-developer
//! sidebar. The search box accepts input but does not filter anything.

use crate::app::App;
use crate::clipboard::Clipboard;
use crate::models::fixtures::{self, COMMUNITY_STATS};
use crate::models::{Developer, Snippet};
use crate::ui::colors::RosePine;
use crate::ui::components::{format_count, render_input, stat_line, tab_line};
use crate::ui::snippet_card::{self, CardAction, CardEvent, SnippetCard};
use crate::ui::toast::Toasts;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListState, Paragraph, Widget, Wrap},
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunityTab {
    #[default]
    Trending,
    Recent,
    Popular,
}

impl CommunityTab {
    const TABS: [CommunityTab; 3] = [
        CommunityTab::Trending,
        CommunityTab::Recent,
        CommunityTab::Popular,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommunityTab::Trending => "Trending",
            CommunityTab::Recent => "Recent",
            CommunityTab::Popular => "Popular",
        }
    }

    fn index(&self) -> usize {
        match self {
            CommunityTab::Trending => 0,
            CommunityTab::Recent => 1,
            CommunityTab::Popular => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::TABS[(self.index() + 1) % Self::TABS.len()]
    }

    pub fn previous(&self) -> Self {
        Self::TABS[(self.index() + Self::TABS.len() - 1) % Self::TABS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunityFocus {
    #[default]
    Feed,
    Search,
}

#[derive(Debug)]
pub struct CommunityState {
    pub snippets: Vec<Snippet>,
    pub developers: Vec<Developer>,
    pub search_query: String,
    pub active_tab: CommunityTab,
    pub focus: CommunityFocus,
    pub selected: usize,
    pub selected_developer: usize,
    cards: HashMap<String, SnippetCard>,
}

impl CommunityState {
    pub fn new() -> Self {
        Self {
            snippets: fixtures::community_snippets(),
            developers: fixtures::featured_developers(),
            search_query: String::new(),
            active_tab: CommunityTab::Trending,
            focus: CommunityFocus::Feed,
            selected: 0,
            selected_developer: 0,
            cards: HashMap::new(),
        }
    }

    /// The feed under the active tab's ordering
    pub fn ordered(&self) -> Vec<&Snippet> {
        let mut list: Vec<&Snippet> = self.snippets.iter().collect();
        match self.active_tab {
            CommunityTab::Trending => {}
            CommunityTab::Recent => list.reverse(),
            CommunityTab::Popular => list.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }
        list
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.selected = 0;
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if !self.snippets.is_empty() {
            self.selected = (self.selected + 1).min(self.snippets.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_developer(&mut self) {
        if !self.developers.is_empty() {
            self.selected_developer = (self.selected_developer + 1) % self.developers.len();
        }
    }

    pub fn previous_developer(&mut self) {
        if !self.developers.is_empty() {
            self.selected_developer =
                (self.selected_developer + self.developers.len() - 1) % self.developers.len();
        }
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.ordered().get(self.selected).copied()
    }

    pub fn card(&self, id: &str) -> SnippetCard {
        self.cards.get(id).cloned().unwrap_or_default()
    }

    /// Following is acknowledged only; nothing is recorded
    pub fn follow_selected(&self, toasts: &mut Toasts) {
        if let Some(developer) = self.developers.get(self.selected_developer) {
            toasts.success(format!("Now following {}!", developer.name));
        }
    }

    pub fn focus_search(&mut self) {
        self.focus = CommunityFocus::Search;
    }

    pub fn blur(&mut self) {
        self.focus = CommunityFocus::Feed;
    }

    pub fn is_capturing_text(&self) -> bool {
        self.focus == CommunityFocus::Search
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    /// Community snippets belong to other people: editing means forking, deleting is refused
    pub fn handle_card_action(
        &mut self,
        action: CardAction,
        clipboard: &mut dyn Clipboard,
        toasts: &mut Toasts,
    ) {
        let Some(snippet) = self.selected_snippet().cloned() else {
            return;
        };

        // must not reach the card, which toasts a successful delete
        if action == CardAction::Delete {
            toasts.info("You can only delete your own snippets");
            return;
        }

        let card = self.cards.entry(snippet.id.clone()).or_default();
        match card.handle(action, &snippet, clipboard, toasts) {
            Some(CardEvent::View(_)) => toasts.info("Snippet viewer will open here"),
            Some(CardEvent::Edit(_)) => toasts.info("Fork snippet to edit it"),
            Some(CardEvent::Delete(_)) | None => {}
        }
    }
}

impl Default for CommunityState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.community;

    let block = Block::bordered()
        .title(" Community ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let columns = Layout::horizontal([Constraint::Fill(3), Constraint::Length(34)]).split(inner);

    let main = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(columns[0]);

    render_stats(frame, main[0]);

    render_input(
        frame,
        main[1],
        "Search",
        &state.search_query,
        "Search community snippets...",
        state.focus == CommunityFocus::Search,
    );

    let tab_titles: Vec<&str> = CommunityTab::TABS.iter().map(|t| t.label()).collect();
    Paragraph::new(tab_line(&tab_titles, state.active_tab.index()))
        .render(main[2], frame.buffer_mut());

    let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)]).split(main[3]);
    let ordered = state.ordered();

    let items: Vec<_> = ordered
        .iter()
        .map(|s| snippet_card::list_item(s, &state.card(&s.id), body[0].width))
        .collect();
    let list = List::new(items)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, body[0], &mut list_state);

    if let Some(snippet) = ordered.get(state.selected) {
        snippet_card::render(
            frame,
            body[1],
            snippet,
            &state.card(&snippet.id),
            &app.config.syntax_theme,
        );
    }

    render_sidebar(frame, columns[1], state);
}

fn render_stats(frame: &mut Frame, area: Rect) {
    Block::default()
        .style(Style::default().bg(RosePine::OVERLAY))
        .render(area, frame.buffer_mut());

    let cells = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    let colors = [RosePine::IRIS, RosePine::FOAM, RosePine::LOVE, RosePine::PINE];
    for ((cell, (value, label)), color) in cells.iter().zip(COMMUNITY_STATS).zip(colors) {
        Paragraph::new(stat_line(label, value.to_string(), color))
            .alignment(Alignment::Center)
            .render(*cell, frame.buffer_mut());
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &CommunityState) {
    let chunks = Layout::vertical([Constraint::Fill(2), Constraint::Fill(1)]).split(area);

    let mut lines = Vec::new();
    for (i, dev) in state.developers.iter().enumerate() {
        let name_style = if i == state.selected_developer {
            Style::default().fg(RosePine::LOVE).bold()
        } else {
            Style::default().fg(RosePine::TEXT).bold()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", dev.avatar),
                Style::default().fg(RosePine::BASE).bg(RosePine::IRIS),
            ),
            Span::styled(format!(" {}", dev.name), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} snippets · {} followers · ♥ {}",
                dev.snippets,
                format_count(dev.followers),
                format_count(dev.total_likes)
            ),
            Style::default().fg(RosePine::SUBTLE),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", dev.specialties_label()),
            Style::default().fg(RosePine::MUTED).italic(),
        )));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Featured Developers [w] Follow ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(chunks[0], frame.buffer_mut());

    let tags: Vec<Span> = fixtures::TRENDING_TAGS
        .iter()
        .map(|t| Span::styled(format!("#{} ", t), Style::default().fg(RosePine::FOAM)))
        .collect();

    Paragraph::new(Line::from(tags))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(" Trending Tags ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(chunks[1], frame.buffer_mut());
}
